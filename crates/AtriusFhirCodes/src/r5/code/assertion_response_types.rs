//! HTTP response codes a test script assertion can expect.

use crate::macros::code_system;

code_system! {
    /// The type of response code to use for assertion.
    AssertionResponseTypes => "http://hl7.org/fhir/assert-response-code-types";

    Continue, CONTINUE = "continue" => "Continue",
        "Response code is 100.";
    SwitchingProtocols, SWITCHING_PROTOCOLS = "switchingProtocols" => "Switching Protocols",
        "Response code is 101.";
    Okay, OKAY = "okay" => "OK",
        "Response code is 200.";
    Created, CREATED = "created" => "Created",
        "Response code is 201.";
    Accepted, ACCEPTED = "accepted" => "Accepted",
        "Response code is 202.";
    NonAuthoritativeInformation, NON_AUTHORITATIVE_INFORMATION = "nonAuthoritativeInformation" => "Non-Authoritative Information",
        "Response code is 203.";
    NoContent, NO_CONTENT = "noContent" => "No Content",
        "Response code is 204.";
    ResetContent, RESET_CONTENT = "resetContent" => "Reset Content",
        "Response code is 205.";
    PartialContent, PARTIAL_CONTENT = "partialContent" => "Partial Content",
        "Response code is 206.";
    MultipleChoices, MULTIPLE_CHOICES = "multipleChoices" => "Multiple Choices",
        "Response code is 300.";
    MovedPermanently, MOVED_PERMANENTLY = "movedPermanently" => "Moved Permanently",
        "Response code is 301.";
    Found, FOUND = "found" => "Found",
        "Response code is 302.";
    SeeOther, SEE_OTHER = "seeOther" => "See Other",
        "Response code is 303.";
    NotModified, NOT_MODIFIED = "notModified" => "Not Modified",
        "Response code is 304.";
    UseProxy, USE_PROXY = "useProxy" => "Use Proxy",
        "Response code is 305.";
    TemporaryRedirect, TEMPORARY_REDIRECT = "temporaryRedirect" => "Temporary Redirect",
        "Response code is 307.";
    PermanentRedirect, PERMANENT_REDIRECT = "permanentRedirect" => "Permanent Redirect",
        "Response code is 308.";
    BadRequest, BAD_REQUEST = "badRequest" => "Bad Request",
        "Response code is 400.";
    Unauthorized, UNAUTHORIZED = "unauthorized" => "Unauthorized",
        "Response code is 401.";
    PaymentRequired, PAYMENT_REQUIRED = "paymentRequired" => "Payment Required",
        "Response code is 402.";
    Forbidden, FORBIDDEN = "forbidden" => "Forbidden",
        "Response code is 403.";
    NotFound, NOT_FOUND = "notFound" => "Not Found",
        "Response code is 404.";
    MethodNotAllowed, METHOD_NOT_ALLOWED = "methodNotAllowed" => "Method Not Allowed",
        "Response code is 405.";
    NotAcceptable, NOT_ACCEPTABLE = "notAcceptable" => "Not Acceptable",
        "Response code is 406.";
    ProxyAuthenticationRequired, PROXY_AUTHENTICATION_REQUIRED = "proxyAuthenticationRequired" => "Proxy Authentication Required",
        "Response code is 407.";
    RequestTimeout, REQUEST_TIMEOUT = "requestTimeout" => "Request Timeout",
        "Response code is 408.";
    Conflict, CONFLICT = "conflict" => "Conflict",
        "Response code is 409.";
    Gone, GONE = "gone" => "Gone",
        "Response code is 410.";
    LengthRequired, LENGTH_REQUIRED = "lengthRequired" => "Length Required",
        "Response code is 411.";
    PreconditionFailed, PRECONDITION_FAILED = "preconditionFailed" => "Precondition Failed",
        "Response code is 412.";
    ContentTooLarge, CONTENT_TOO_LARGE = "contentTooLarge" => "Content Too Large",
        "Response code is 413.";
    UriTooLong, URI_TOO_LONG = "uriTooLong" => "URI Too Long",
        "Response code is 414.";
    UnsupportedMediaType, UNSUPPORTED_MEDIA_TYPE = "unsupportedMediaType" => "Unsupported Media Type",
        "Response code is 415.";
    RangeNotSatisfiable, RANGE_NOT_SATISFIABLE = "rangeNotSatisfiable" => "Range Not Satisfiable",
        "Response code is 416.";
    ExpectationFailed, EXPECTATION_FAILED = "expectationFailed" => "Expectation Failed",
        "Response code is 417.";
    MisdirectedRequest, MISDIRECTED_REQUEST = "misdirectedRequest" => "Misdirected Request",
        "Response code is 421.";
    UnprocessableContent, UNPROCESSABLE_CONTENT = "unprocessableContent" => "Unprocessable Content",
        "Response code is 422.";
    UpgradeRequired, UPGRADE_REQUIRED = "upgradeRequired" => "Upgrade Required",
        "Response code is 426.";
    InternalServerError, INTERNAL_SERVER_ERROR = "internalServerError" => "Internal Server Error",
        "Response code is 500.";
    NotImplemented, NOT_IMPLEMENTED = "notImplemented" => "Not Implemented",
        "Response code is 501.";
    BadGateway, BAD_GATEWAY = "badGateway" => "Bad Gateway",
        "Response code is 502.";
    ServiceUnavailable, SERVICE_UNAVAILABLE = "serviceUnavailable" => "Service Unavailable",
        "Response code is 503.";
    GatewayTimeout, GATEWAY_TIMEOUT = "gatewayTimeout" => "Gateway Timeout",
        "Response code is 504.";
    HttpVersionNotSupported, HTTP_VERSION_NOT_SUPPORTED = "httpVersionNotSupported" => "HTTP Version Not Supported",
        "Response code is 505.";
}
