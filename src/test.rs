use crate::{HttpStatus, InvalidStatusCode, Series, StatusError, UnknownStatusCode, code, registry};

const fn is_send_sync<T: Send + Sync + Copy>() { }
const _: () = {
    is_send_sync::<HttpStatus>();
    is_send_sync::<Series>();
    is_send_sync::<UnknownStatusCode>();
    is_send_sync::<InvalidStatusCode>();
    is_send_sync::<StatusError>();
};

const _: () = {
    assert!(registry::is_known(code::IM_A_TEAPOT));
    assert!(!registry::is_known(419));
    assert!(HttpStatus::NOT_FOUND.is_client_error());
    assert!(HttpStatus::NOT_FOUND.code() == code::NOT_FOUND);
};

#[test]
fn reason_phrase() {
    assert_eq!(registry::reason_phrase(100), Ok("Continue"));
    assert_eq!(registry::reason_phrase(103), Ok("Checkpoint"));
    assert_eq!(registry::reason_phrase(200), Ok("OK"));
    assert_eq!(registry::reason_phrase(203), Ok("Non-Authoritative Information"));
    assert_eq!(registry::reason_phrase(226), Ok("IM Used"));
    assert_eq!(registry::reason_phrase(306), Ok("Unused"));
    assert_eq!(registry::reason_phrase(404), Ok("Not Found"));
    assert_eq!(registry::reason_phrase(413), Ok("Request Entity Too Large"));
    assert_eq!(registry::reason_phrase(414), Ok("Request-URI Too Long"));
    assert_eq!(registry::reason_phrase(418), Ok("I'm a teapot"));
    assert_eq!(registry::reason_phrase(420), Ok("Method Failure"));
    assert_eq!(registry::reason_phrase(421), Ok("Destination Locked"));
    assert_eq!(registry::reason_phrase(425), Ok("Unordered Collection"));
    assert_eq!(registry::reason_phrase(434), Ok("Requested host unavailable"));
    assert_eq!(registry::reason_phrase(444), Ok("No response"));
    assert_eq!(registry::reason_phrase(449), Ok("Retry With"));
    assert_eq!(registry::reason_phrase(451), Ok("Unavailable For Legal Reasons"));
    assert_eq!(registry::reason_phrase(505), Ok("HTTP Version Not Supported"));
    assert_eq!(registry::reason_phrase(509), Ok("Bandwidth Limit Exceeded"));
    assert_eq!(registry::reason_phrase(511), Ok("Network Authentication Required"));

    for unknown in [0, 99, 104, 199, 209, 309, 419, 427, 430, 450, 512, 599, 600, u16::MAX] {
        let err = registry::reason_phrase(unknown).unwrap_err();
        assert_eq!(err, UnknownStatusCode(unknown));
        assert_eq!(err.code(), unknown);
        assert!(registry::lookup(unknown).is_none());
        assert!(!registry::is_known(unknown));
    }
}

#[test]
fn table() {
    let codes: Vec<u16> = registry::codes().map(u16::from).collect();

    assert_eq!(codes.len(), 68);
    assert_eq!(registry::codes().len(), 68);
    assert_eq!(codes.first(), Some(&100));
    assert_eq!(codes.last(), Some(&511));
    assert!(codes.windows(2).all(|w| w[0] < w[1]));

    for status in registry::codes() {
        assert!(status.is_known());
        assert!(status.series().is_ok());
        assert!(!status.reason_phrase().unwrap().is_empty());
    }
}

#[test]
fn series() {
    assert_eq!(registry::series(100), Ok(Series::Informational));
    assert_eq!(registry::series(102), Ok(Series::Informational));
    assert_eq!(registry::series(200), Ok(Series::Successful));
    assert_eq!(registry::series(299), Ok(Series::Successful));
    assert_eq!(registry::series(308), Ok(Series::Redirection));
    assert_eq!(registry::series(404), Ok(Series::ClientError));
    assert_eq!(registry::series(511), Ok(Series::ServerError));
    assert_eq!(registry::series(599), Ok(Series::ServerError));

    // classification does not require a table entry
    assert_eq!(registry::series(199), Ok(Series::Informational));

    for invalid in [0, 50, 99, 600, 650, 700, 999, 1000, 25600, u16::MAX] {
        assert_eq!(registry::series(invalid), Err(InvalidStatusCode(invalid)));
    }
}

#[test]
fn series_props() {
    assert_eq!(Series::ClientError.as_u8(), 4);
    assert_eq!(Series::from_digit(3), Some(Series::Redirection));
    assert_eq!(Series::from_digit(0), None);
    assert_eq!(Series::from_digit(6), None);
    assert_eq!(Series::ServerError.as_str(), "Server Error");
    assert_eq!(Series::Informational.to_string(), "Informational");

    assert!(Series::ClientError.is_error());
    assert!(Series::ServerError.is_error());
    assert!(!Series::Informational.is_error());
    assert!(!Series::Successful.is_error());
    assert!(!Series::Redirection.is_error());
}

#[test]
fn predicates() {
    assert!(registry::is_informational(101));
    assert!(registry::is_successful(204));
    assert!(registry::is_redirection(307));
    assert!(registry::is_client_error(429));
    assert!(registry::is_server_error(503));

    assert!(!registry::is_informational(200));
    assert!(!registry::is_successful(301));
    assert!(!registry::is_redirection(404));
    assert!(!registry::is_client_error(500));
    assert!(!registry::is_server_error(100));

    assert!(registry::is_error(404));
    assert!(registry::is_error(500));
    assert!(!registry::is_error(200));
    assert!(!registry::is_error(101));
    assert!(!registry::is_error(302));

    // codes without a series
    for invalid in [50, 650, 700] {
        assert!(!registry::is_informational(invalid));
        assert!(!registry::is_successful(invalid));
        assert!(!registry::is_redirection(invalid));
        assert!(!registry::is_client_error(invalid));
        assert!(!registry::is_server_error(invalid));
        assert!(!registry::is_error(invalid));
    }
}

#[test]
fn http_status() {
    let status = HttpStatus::new(301);
    assert_eq!(status.code(), 301);
    assert_eq!(status, HttpStatus::MOVED_PERMANENTLY);
    assert_eq!(status, 301u16);
    assert_eq!(status.reason_phrase(), Ok("Moved Permanently"));
    assert_eq!(status.code_with_reason_phrase().unwrap(), "301 Moved Permanently");
    assert_eq!(status.series(), Ok(Series::Redirection));
    assert!(status.is_redirection());
    assert!(!status.is_error());

    assert_eq!(HttpStatus::OK.code_with_reason_phrase().unwrap(), "200 OK");
    assert_eq!(
        HttpStatus::UNAVAILABLE_FOR_LEGAL_REASONS.code_with_reason_phrase().unwrap(),
        "451 Unavailable For Legal Reasons",
    );

    let status = HttpStatus::from(code::BAD_GATEWAY);
    assert!(status.is_server_error());
    assert!(status.is_error());
    assert_eq!(u16::from(status), 502);

    assert_eq!(HttpStatus::default(), HttpStatus::OK);
}

#[test]
fn http_status_unknown() {
    // construction never validates
    let status = HttpStatus::new(299);
    assert_eq!(status.code(), 299);
    assert!(!status.is_known());
    assert!(status.is_successful());
    assert_eq!(status.reason_phrase(), Err(UnknownStatusCode(299)));
    assert_eq!(status.code_with_reason_phrase(), Err(UnknownStatusCode(299)));

    let status = HttpStatus::new(700);
    assert_eq!(status.series(), Err(InvalidStatusCode(700)));
    assert!(!status.is_error());
}

#[test]
fn http_status_independent() {
    let first = HttpStatus::new(200);
    let second = HttpStatus::new(404);

    assert_eq!(first.code(), 200);
    assert_eq!(second.code(), 404);
    assert_eq!(first.reason_phrase(), Ok("OK"));
    assert_eq!(second.reason_phrase(), Ok("Not Found"));
}

#[test]
fn fmt() {
    assert_eq!(HttpStatus::NOT_FOUND.to_string(), "404 Not Found");
    assert_eq!(HttpStatus::new(299).to_string(), "299");
    assert_eq!(format!("{:?}", HttpStatus::NOT_FOUND), "HttpStatus(404)");

    assert_eq!(UnknownStatusCode(600).to_string(), "unknown HTTP status code: 600");
    assert_eq!(InvalidStatusCode(50).to_string(), "invalid HTTP status code: 50");
}

#[test]
fn status_error() {
    fn describe(code: u16) -> Result<String, StatusError> {
        let status = HttpStatus::new(code);
        let series = status.series()?;
        let line = status.code_with_reason_phrase()?;
        Ok(format!("{line} ({series})"))
    }

    assert_eq!(describe(404).unwrap(), "404 Not Found (Client Error)");

    let err = describe(299).unwrap_err();
    assert_eq!(err, StatusError::Unknown(UnknownStatusCode(299)));
    assert_eq!(err.code(), 299);
    assert_eq!(err.to_string(), "unknown HTTP status code: 299");

    let err = describe(650).unwrap_err();
    assert_eq!(err, StatusError::Invalid(InvalidStatusCode(650)));
    assert_eq!(err.code(), 650);
}

#[cfg(feature = "serde")]
#[test]
fn serde_repr() {
    assert_eq!(serde_json::to_string(&HttpStatus::NOT_FOUND).unwrap(), "404");
    assert_eq!(serde_json::from_str::<HttpStatus>("299").unwrap(), HttpStatus::new(299));

    assert_eq!(serde_json::to_string(&Series::ServerError).unwrap(), "5");
    assert_eq!(serde_json::from_str::<Series>("2").unwrap(), Series::Successful);
    assert!(serde_json::from_str::<Series>("6").is_err());
}
