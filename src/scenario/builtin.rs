//! Pre-built error responses for common Telegram API failures.
//!
//! These fire when a request carries the `X-TG-Mock-Scenario: <name>` header
//! and short-circuit the normal pipeline.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::ErrorResponse;

macro_rules! err {
    ($code:expr, $desc:expr) => {
        ErrorResponse {
            error_code: $code,
            description: $desc.to_string(),
            retry_after: None,
        }
    };
    ($code:expr, $desc:expr, $retry:expr) => {
        ErrorResponse {
            error_code: $code,
            description: $desc.to_string(),
            retry_after: Some($retry),
        }
    };
}

static BUILTIN_ERRORS: Lazy<HashMap<&'static str, ErrorResponse>> = Lazy::new(|| {
    HashMap::from([
        // 400 Bad Request
        ("bad_request", err!(400, "Bad Request")),
        ("chat_not_found", err!(400, "Bad Request: chat not found")),
        ("user_not_found", err!(400, "Bad Request: user not found")),
        ("message_not_found", err!(400, "Bad Request: message to edit not found")),
        ("message_not_modified", err!(400, "Bad Request: message is not modified")),
        ("message_text_empty", err!(400, "Bad Request: message text is empty")),
        ("message_too_long", err!(400, "Bad Request: message is too long")),
        ("message_cant_be_edited", err!(400, "Bad Request: message can't be edited")),
        ("message_cant_be_deleted", err!(400, "Bad Request: message can't be deleted")),
        ("reply_message_not_found", err!(400, "Bad Request: reply message not found")),
        ("button_url_invalid", err!(400, "Bad Request: BUTTON_URL_INVALID")),
        ("entities_too_long", err!(400, "Bad Request: entities too long")),
        ("file_too_big", err!(400, "Bad Request: file is too big")),
        ("invalid_file_id", err!(400, "Bad Request: invalid file id")),
        ("member_not_found", err!(400, "Bad Request: member not found")),
        ("group_deactivated", err!(400, "Bad Request: group is deactivated")),
        ("peer_id_invalid", err!(400, "Bad Request: PEER_ID_INVALID")),
        ("wrong_parameter_action", err!(400, "Bad Request: wrong parameter action in request")),
        // 401 Unauthorized
        ("unauthorized", err!(401, "Unauthorized")),
        // 403 Forbidden
        ("forbidden", err!(403, "Forbidden")),
        ("bot_blocked", err!(403, "Forbidden: bot was blocked by the user")),
        ("bot_kicked", err!(403, "Forbidden: bot was kicked from the chat")),
        ("cant_initiate", err!(403, "Forbidden: bot can't initiate conversation with a user")),
        ("cant_send_to_bots", err!(403, "Forbidden: bot can't send messages to bots")),
        ("not_member_channel", err!(403, "Forbidden: bot is not a member of the channel chat")),
        ("not_member_supergroup", err!(403, "Forbidden: bot is not a member of the supergroup chat")),
        ("user_deactivated", err!(403, "Forbidden: user is deactivated")),
        ("not_enough_rights_text", err!(403, "Forbidden: not enough rights to send text messages")),
        ("not_enough_rights_photo", err!(403, "Forbidden: not enough rights to send photos")),
        // 409 Conflict
        ("webhook_active", err!(409, "Conflict: can't use getUpdates method while webhook is active")),
        ("terminated_by_long_poll", err!(409, "Conflict: terminated by other long poll")),
        // 429 Rate Limit
        ("rate_limit", err!(429, "Too Many Requests: retry after 30", 30)),
        ("flood_wait", err!(429, "Flood control exceeded. Retry in 60 seconds", 60)),
    ])
});

/// Look up a pre-built error response by name.
pub fn builtin_error(name: &str) -> Option<&'static ErrorResponse> {
    BUILTIN_ERRORS.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_error() {
        let err = builtin_error("chat_not_found").unwrap();
        assert_eq!(err.error_code, 400);
        assert_eq!(err.description, "Bad Request: chat not found");
        assert!(err.retry_after.is_none());
    }

    #[test]
    fn test_rate_limit_carries_retry_after() {
        let err = builtin_error("rate_limit").unwrap();
        assert_eq!(err.error_code, 429);
        assert_eq!(err.retry_after, Some(30));
    }

    #[test]
    fn test_unknown_error() {
        assert!(builtin_error("definitely_not_a_thing").is_none());
    }

    #[test]
    fn test_status_code_families() {
        for (name, err) in BUILTIN_ERRORS.iter() {
            assert!(
                matches!(err.error_code, 400 | 401 | 403 | 409 | 429),
                "unexpected code {} for {}",
                err.error_code,
                name
            );
        }
    }
}
