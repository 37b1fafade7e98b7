//! Named HTTP status code constants.
//!
//! Every constant in this module has an entry in the reason phrase table, the same codes are
//! available as [`HttpStatus`] associated constants, e.g: [`HttpStatus::NOT_FOUND`].
//!
//! Beside the [IANA registry], the table keeps some deprecated and unofficial codes which are
//! still seen in the wild.
//!
//! [IANA registry]: <https://www.iana.org/assignments/http-status-codes>
use crate::HttpStatus;

macro_rules! status_codes {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        $(
            $(#[$doc])*
            pub const $id: u16 = $int;
        )*

        impl HttpStatus {
            $(
                $(#[$doc])*
                pub const $id: Self = Self::new($int);
            )*
        }

        /// Returns the reason phrase of `code`, e.g: `"Not Found"` for `404`.
        pub(crate) const fn lookup(code: u16) -> Option<&'static str> {
            match code {
                $(
                    $int => Some($msg),
                )*
                _ => None,
            }
        }

        /// Every code in the table, in ascending order.
        pub(crate) static CODES: &[u16] = &[$($int,)*];
    };
}

status_codes! {
    // ===== Informational 1xx =====

    /// `100`, [RFC7231 section 6.2.1](<https://tools.ietf.org/html/rfc7231#section-6.2.1>).
    100 CONTINUE "Continue";
    /// `101`, [RFC7231 section 6.2.2](<https://tools.ietf.org/html/rfc7231#section-6.2.2>).
    101 SWITCHING_PROTOCOLS "Switching Protocols";
    /// `102`, WebDAV [RFC2518 section 10.1](<https://tools.ietf.org/html/rfc2518#section-10.1>).
    102 PROCESSING "Processing";
    /// `103`, from the resumable POST/PUT proposal of Google Gears.
    ///
    /// Not registered, the IANA registry assigns `103` to Early Hints.
    103 CHECKPOINT "Checkpoint";

    // ===== Successful 2xx =====

    /// `200`, [RFC7231 section 6.3.1](<https://tools.ietf.org/html/rfc7231#section-6.3.1>).
    200 OK "OK";
    /// `201`, [RFC7231 section 6.3.2](<https://tools.ietf.org/html/rfc7231#section-6.3.2>).
    201 CREATED "Created";
    /// `202`, [RFC7231 section 6.3.3](<https://tools.ietf.org/html/rfc7231#section-6.3.3>).
    202 ACCEPTED "Accepted";
    /// `203`, [RFC7231 section 6.3.4](<https://tools.ietf.org/html/rfc7231#section-6.3.4>).
    203 NON_AUTHORITATIVE_INFORMATION "Non-Authoritative Information";
    /// `204`, [RFC7231 section 6.3.5](<https://tools.ietf.org/html/rfc7231#section-6.3.5>).
    204 NO_CONTENT "No Content";
    /// `205`, [RFC7231 section 6.3.6](<https://tools.ietf.org/html/rfc7231#section-6.3.6>).
    205 RESET_CONTENT "Reset Content";
    /// `206`, [RFC7233 section 4.1](<https://tools.ietf.org/html/rfc7233#section-4.1>).
    206 PARTIAL_CONTENT "Partial Content";
    /// `207`, WebDAV [RFC4918 section 13](<https://tools.ietf.org/html/rfc4918#section-13>).
    207 MULTI_STATUS "Multi-Status";
    /// `208`, WebDAV binding extensions
    /// [RFC5842 section 7.1](<https://tools.ietf.org/html/rfc5842#section-7.1>).
    208 ALREADY_REPORTED "Already Reported";
    /// `226`, delta encoding [RFC3229 section 10.4.1](<https://tools.ietf.org/html/rfc3229#section-10.4.1>).
    226 IM_USED "IM Used";

    // ===== Redirection 3xx =====

    /// `300`, [RFC7231 section 6.4.1](<https://tools.ietf.org/html/rfc7231#section-6.4.1>).
    300 MULTIPLE_CHOICES "Multiple Choices";
    /// `301`, [RFC7231 section 6.4.2](<https://tools.ietf.org/html/rfc7231#section-6.4.2>).
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302`, [RFC7231 section 6.4.3](<https://tools.ietf.org/html/rfc7231#section-6.4.3>).
    302 FOUND "Found";
    /// `303`, [RFC7231 section 6.4.4](<https://tools.ietf.org/html/rfc7231#section-6.4.4>).
    303 SEE_OTHER "See Other";
    /// `304`, [RFC7232 section 4.1](<https://tools.ietf.org/html/rfc7232#section-4.1>).
    304 NOT_MODIFIED "Not Modified";
    /// `305`, [RFC7231 section 6.4.5](<https://tools.ietf.org/html/rfc7231#section-6.4.5>).
    ///
    /// Deprecated due to security concerns regarding in-band configuration of a proxy.
    305 USE_PROXY "Use Proxy";
    /// `306`, [RFC7231 section 6.4.6](<https://tools.ietf.org/html/rfc7231#section-6.4.6>).
    306 UNUSED "Unused";
    /// `307`, [RFC7231 section 6.4.7](<https://tools.ietf.org/html/rfc7231#section-6.4.7>).
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    /// `308`, [RFC7238](<https://tools.ietf.org/html/rfc7238>).
    308 PERMANENT_REDIRECT "Permanent Redirect";

    // ===== Client Error 4xx =====

    /// `400`, [RFC7231 section 6.5.1](<https://tools.ietf.org/html/rfc7231#section-6.5.1>).
    400 BAD_REQUEST "Bad Request";
    /// `401`, [RFC7235 section 3.1](<https://tools.ietf.org/html/rfc7235#section-3.1>).
    401 UNAUTHORIZED "Unauthorized";
    /// `402`, [RFC7231 section 6.5.2](<https://tools.ietf.org/html/rfc7231#section-6.5.2>).
    402 PAYMENT_REQUIRED "Payment Required";
    /// `403`, [RFC7231 section 6.5.3](<https://tools.ietf.org/html/rfc7231#section-6.5.3>).
    403 FORBIDDEN "Forbidden";
    /// `404`, [RFC7231 section 6.5.4](<https://tools.ietf.org/html/rfc7231#section-6.5.4>).
    404 NOT_FOUND "Not Found";
    /// `405`, [RFC7231 section 6.5.5](<https://tools.ietf.org/html/rfc7231#section-6.5.5>).
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `406`, [RFC7231 section 6.5.6](<https://tools.ietf.org/html/rfc7231#section-6.5.6>).
    406 NOT_ACCEPTABLE "Not Acceptable";
    /// `407`, [RFC7235 section 3.2](<https://tools.ietf.org/html/rfc7235#section-3.2>).
    407 PROXY_AUTHENTICATION_REQUIRED "Proxy Authentication Required";
    /// `408`, [RFC7231 section 6.5.7](<https://tools.ietf.org/html/rfc7231#section-6.5.7>).
    408 REQUEST_TIMEOUT "Request Timeout";
    /// `409`, [RFC7231 section 6.5.8](<https://tools.ietf.org/html/rfc7231#section-6.5.8>).
    409 CONFLICT "Conflict";
    /// `410`, [RFC7231 section 6.5.9](<https://tools.ietf.org/html/rfc7231#section-6.5.9>).
    410 GONE "Gone";
    /// `411`, [RFC7231 section 6.5.10](<https://tools.ietf.org/html/rfc7231#section-6.5.10>).
    411 LENGTH_REQUIRED "Length Required";
    /// `412`, [RFC7232 section 4.2](<https://tools.ietf.org/html/rfc7232#section-4.2>).
    412 PRECONDITION_FAILED "Precondition Failed";
    /// `413`, [RFC7231 section 6.5.11](<https://tools.ietf.org/html/rfc7231#section-6.5.11>).
    ///
    /// Later renamed to "Payload Too Large", the table keeps the RFC2616 phrase.
    413 REQUEST_ENTITY_TOO_LARGE "Request Entity Too Large";
    /// `414`, [RFC7231 section 6.5.12](<https://tools.ietf.org/html/rfc7231#section-6.5.12>).
    414 REQUEST_URI_TOO_LONG "Request-URI Too Long";
    /// `415`, [RFC7231 section 6.5.13](<https://tools.ietf.org/html/rfc7231#section-6.5.13>).
    415 UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type";
    /// `416`, [RFC7233 section 4.4](<https://tools.ietf.org/html/rfc7233#section-4.4>).
    416 REQUESTED_RANGE_NOT_SATISFIABLE "Requested Range Not Satisfiable";
    /// `417`, [RFC7231 section 6.5.14](<https://tools.ietf.org/html/rfc7231#section-6.5.14>).
    417 EXPECTATION_FAILED "Expectation Failed";
    /// `418`, HTCPCP/1.0 [RFC2324 section 2.3.2](<https://tools.ietf.org/html/rfc2324#section-2.3.2>).
    418 IM_A_TEAPOT "I'm a teapot";
    /// `420`, deprecated, from the WebDAV protocol drafts.
    420 METHOD_FAILURE "Method Failure";
    /// `421`, deprecated, from the WebDAV protocol drafts.
    421 DESTINATION_LOCKED "Destination Locked";
    /// `422`, WebDAV [RFC4918 section 11.2](<https://tools.ietf.org/html/rfc4918#section-11.2>).
    422 UNPROCESSABLE_ENTITY "Unprocessable Entity";
    /// `423`, WebDAV [RFC4918 section 11.3](<https://tools.ietf.org/html/rfc4918#section-11.3>).
    423 LOCKED "Locked";
    /// `424`, WebDAV [RFC4918 section 11.4](<https://tools.ietf.org/html/rfc4918#section-11.4>).
    424 FAILED_DEPENDENCY "Failed Dependency";
    /// `425`
    425 UNORDERED_COLLECTION "Unordered Collection";
    /// `426`, [RFC2817 section 6](<https://tools.ietf.org/html/rfc2817#section-6>).
    426 UPGRADE_REQUIRED "Upgrade Required";
    /// `428`, [RFC6585 section 3](<https://tools.ietf.org/html/rfc6585#section-3>).
    428 PRECONDITION_REQUIRED "Precondition Required";
    /// `429`, [RFC6585 section 4](<https://tools.ietf.org/html/rfc6585#section-4>).
    429 TOO_MANY_REQUESTS "Too Many Requests";
    /// `431`, [RFC6585 section 5](<https://tools.ietf.org/html/rfc6585#section-5>).
    431 REQUEST_HEADER_FIELDS_TOO_LARGE "Request Header Fields Too Large";
    /// `434`
    434 REQUESTED_HOST_UNAVAILABLE "Requested host unavailable";
    /// `444`, used by nginx to close the connection without a response.
    444 NO_RESPONSE "No response";
    /// `449`, Microsoft extension.
    449 RETRY_WITH "Retry With";
    /// `451`, an HTTP status code to report legal obstacles
    /// [draft](<https://tools.ietf.org/html/draft-ietf-httpbis-legally-restricted-status-04>).
    451 UNAVAILABLE_FOR_LEGAL_REASONS "Unavailable For Legal Reasons";

    // ===== Server Error 5xx =====

    /// `500`, [RFC7231 section 6.6.1](<https://tools.ietf.org/html/rfc7231#section-6.6.1>).
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `501`, [RFC7231 section 6.6.2](<https://tools.ietf.org/html/rfc7231#section-6.6.2>).
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `502`, [RFC7231 section 6.6.3](<https://tools.ietf.org/html/rfc7231#section-6.6.3>).
    502 BAD_GATEWAY "Bad Gateway";
    /// `503`, [RFC7231 section 6.6.4](<https://tools.ietf.org/html/rfc7231#section-6.6.4>).
    503 SERVICE_UNAVAILABLE "Service Unavailable";
    /// `504`, [RFC7231 section 6.6.5](<https://tools.ietf.org/html/rfc7231#section-6.6.5>).
    504 GATEWAY_TIMEOUT "Gateway Timeout";
    /// `505`, [RFC7231 section 6.6.6](<https://tools.ietf.org/html/rfc7231#section-6.6.6>).
    505 HTTP_VERSION_NOT_SUPPORTED "HTTP Version Not Supported";
    /// `506`, transparent content negotiation
    /// [RFC2295 section 8.1](<https://tools.ietf.org/html/rfc2295#section-8.1>).
    506 VARIANT_ALSO_NEGOTIATES "Variant Also Negotiates";
    /// `507`, WebDAV [RFC4918 section 11.5](<https://tools.ietf.org/html/rfc4918#section-11.5>).
    507 INSUFFICIENT_STORAGE "Insufficient Storage";
    /// `508`, WebDAV binding extensions
    /// [RFC5842 section 7.2](<https://tools.ietf.org/html/rfc5842#section-7.2>).
    508 LOOP_DETECTED "Loop Detected";
    /// `509`, unofficial, used by Apache and cPanel.
    509 BANDWIDTH_LIMIT_EXCEEDED "Bandwidth Limit Exceeded";
    /// `510`, HTTP extension framework [RFC2774 section 7](<https://tools.ietf.org/html/rfc2774#section-7>).
    510 NOT_EXTENDED "Not Extended";
    /// `511`, [RFC6585 section 6](<https://tools.ietf.org/html/rfc6585#section-6>).
    511 NETWORK_AUTHENTICATION_REQUIRED "Network Authentication Required";
}
