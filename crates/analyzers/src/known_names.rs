// Medlint
// Copyright (C) 2026 Medlint Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Well-known metadata names of the analyzed message-dispatch library

/// Assembly the marker interfaces and dispatcher types live in
pub const MEDIATR_ASSEMBLY: &str = "MediatR";

/// Marker interface for requests without a response
pub const REQUEST_INTERFACE: &str = "MediatR.IRequest";

/// Marker interface for requests with a response (arity 1)
pub const REQUEST_WITH_RESPONSE_INTERFACE: &str = "MediatR.IRequest`1";

/// Marker interface for streaming requests (arity 1)
pub const STREAM_REQUEST_INTERFACE: &str = "MediatR.IStreamRequest`1";

/// Marker interface for notifications
pub const NOTIFICATION_INTERFACE: &str = "MediatR.INotification";

/// Marker interface for handlers of requests without a response (arity 1)
pub const REQUEST_HANDLER_INTERFACE: &str = "MediatR.IRequestHandler`1";

/// Marker interface for handlers of requests with a response (arity 2)
pub const REQUEST_HANDLER_WITH_RESPONSE_INTERFACE: &str = "MediatR.IRequestHandler`2";

/// Marker interface for streaming request handlers (arity 2)
pub const STREAM_REQUEST_HANDLER_INTERFACE: &str = "MediatR.IStreamRequestHandler`2";

/// Marker interface for notification handlers (arity 1)
pub const NOTIFICATION_HANDLER_INTERFACE: &str = "MediatR.INotificationHandler`1";

/// The dispatcher class
pub const MEDIATOR_CLASS: &str = "MediatR.Mediator";

/// The combined dispatcher capability interface
pub const MEDIATOR_INTERFACE: &str = "MediatR.IMediator";

/// The send-only dispatcher capability interface
pub const SENDER_INTERFACE: &str = "MediatR.ISender";

/// The publish-only dispatcher capability interface
pub const PUBLISHER_INTERFACE: &str = "MediatR.IPublisher";

/// Dispatch method routing a request to its single handler
pub const SEND_METHOD: &str = "Send";

/// Dispatch method broadcasting a notification to its handlers
pub const PUBLISH_METHOD: &str = "Publish";

/// Dispatch method opening a stream for a streaming request
pub const CREATE_STREAM_METHOD: &str = "CreateStream";

/// Conventional suffix for asynchronous dispatch methods
pub const ASYNC_SUFFIX: &str = "Async";

/// Parameter count shared by all dispatch methods (message + token)
pub const DISPATCH_METHOD_PARAMETER_COUNT: usize = 2;

/// Static class declaring the legacy bulk-registration extension method
pub const SERVICE_COLLECTION_EXTENSIONS_CLASS: &str = "Microsoft.Extensions.DependencyInjection.ServiceCollectionExtensions";

/// Legacy bulk-registration extension method
pub const ADD_MEDIATR_METHOD: &str = "AddMediatR";

/// Preferred wrapper registration entry point, surfaced in diagnostics only
pub const ADD_MEDIATOR_METHOD: &str = "AddMediator";
