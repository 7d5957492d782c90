use super::*;

fn options(token: Option<&str>) -> RequestOptions {
    RequestOptions {
        csrf_header: "X-CSRFToken".to_owned(),
        csrf_token: token.map(str::to_owned),
        timeout_ms: 30_000,
    }
}

#[test]
fn request_headers_carry_json_and_csrf() {
    let headers = request_headers(&options(Some("tok")));
    assert_eq!(
        headers,
        vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
            ("X-CSRFToken".to_owned(), "tok".to_owned()),
        ]
    );
}

#[test]
fn request_headers_send_empty_token_when_missing() {
    let headers = request_headers(&options(None));
    assert_eq!(headers[2], ("X-CSRFToken".to_owned(), String::new()));
}

#[test]
fn find_cookie_locates_named_value() {
    let cookies = "sessionid=abc; csrftoken=t0k%3D; theme=dark";
    assert_eq!(find_cookie(cookies, "csrftoken"), Some("t0k%3D"));
    assert_eq!(find_cookie(cookies, "theme"), Some("dark"));
}

#[test]
fn find_cookie_does_not_match_prefixes() {
    assert_eq!(find_cookie("xcsrftoken=nope", "csrftoken"), None);
    assert_eq!(find_cookie("csrftokenx=nope", "csrftoken"), None);
}

#[test]
fn find_cookie_missing_or_empty_is_none() {
    assert_eq!(find_cookie("", "csrftoken"), None);
    assert_eq!(find_cookie("csrftoken=", "csrftoken"), None);
    assert_eq!(find_cookie("a=1;b=2", "csrftoken"), None);
}

#[test]
fn find_cookie_keeps_equals_inside_value() {
    assert_eq!(find_cookie("csrftoken=a=b", "csrftoken"), Some("a=b"));
}

#[test]
fn gateway_error_messages_name_the_cause() {
    assert_eq!(GatewayError::Timeout(500).to_string(), "request timed out after 500ms");
    assert_eq!(GatewayError::Transport("offline".to_owned()).to_string(), "request failed: offline");
}
