// @generated by codegen from api.json (Bot API 7.4). DO NOT EDIT.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A single request parameter of a Bot API method.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub types: &'static [&'static str],
    pub required: bool,
}

/// Wire description of one Bot API method: what it takes and what it
/// returns. The first entry of `returns` is the primary return type.
#[derive(Debug)]
pub struct MethodSpec {
    pub name: &'static str,
    pub returns: &'static [&'static str],
    pub fields: &'static [FieldSpec],
}

/// Look up a method spec by its canonical name.
pub fn method_spec(name: &str) -> Option<&'static MethodSpec> {
    INDEX.get(name).copied()
}

static INDEX: Lazy<HashMap<&'static str, &'static MethodSpec>> =
    Lazy::new(|| METHODS.iter().map(|m| (m.name, m)).collect());

pub static METHODS: &[MethodSpec] = &[
    MethodSpec {
        name: "getMe",
        returns: &["User"],
        fields: &[],
    },
    MethodSpec {
        name: "logOut",
        returns: &["Boolean"],
        fields: &[],
    },
    MethodSpec {
        name: "close",
        returns: &["Boolean"],
        fields: &[],
    },
    MethodSpec {
        name: "getUpdates",
        returns: &["Array of Update"],
        fields: &[
            FieldSpec { name: "offset", types: &["Integer"], required: false },
            FieldSpec { name: "limit", types: &["Integer"], required: false },
            FieldSpec { name: "timeout", types: &["Integer"], required: false },
            FieldSpec { name: "allowed_updates", types: &["Array of String"], required: false },
        ],
    },
    MethodSpec {
        name: "setWebhook",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "url", types: &["String"], required: true },
            FieldSpec { name: "certificate", types: &["InputFile"], required: false },
            FieldSpec { name: "ip_address", types: &["String"], required: false },
            FieldSpec { name: "max_connections", types: &["Integer"], required: false },
            FieldSpec { name: "allowed_updates", types: &["Array of String"], required: false },
            FieldSpec { name: "drop_pending_updates", types: &["Boolean"], required: false },
            FieldSpec { name: "secret_token", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "deleteWebhook",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "drop_pending_updates", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "getWebhookInfo",
        returns: &["WebhookInfo"],
        fields: &[],
    },
    MethodSpec {
        name: "sendMessage",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "business_connection_id", types: &["String"], required: false },
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_thread_id", types: &["Integer"], required: false },
            FieldSpec { name: "text", types: &["String"], required: true },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "entities", types: &["Array of MessageEntity"], required: false },
            FieldSpec { name: "link_preview_options", types: &["LinkPreviewOptions"], required: false },
            FieldSpec { name: "disable_notification", types: &["Boolean"], required: false },
            FieldSpec { name: "protect_content", types: &["Boolean"], required: false },
            FieldSpec { name: "reply_parameters", types: &["ReplyParameters"], required: false },
            FieldSpec { name: "reply_markup", types: &["InlineKeyboardMarkup", "ReplyKeyboardMarkup", "ReplyKeyboardRemove", "ForceReply"], required: false },
        ],
    },
    MethodSpec {
        name: "forwardMessage",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_thread_id", types: &["Integer"], required: false },
            FieldSpec { name: "from_chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "disable_notification", types: &["Boolean"], required: false },
            FieldSpec { name: "protect_content", types: &["Boolean"], required: false },
            FieldSpec { name: "message_id", types: &["Integer"], required: true },
        ],
    },
    MethodSpec {
        name: "copyMessage",
        returns: &["MessageId"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_thread_id", types: &["Integer"], required: false },
            FieldSpec { name: "from_chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_id", types: &["Integer"], required: true },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "disable_notification", types: &["Boolean"], required: false },
            FieldSpec { name: "protect_content", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "sendPhoto",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "business_connection_id", types: &["String"], required: false },
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_thread_id", types: &["Integer"], required: false },
            FieldSpec { name: "photo", types: &["InputFile", "String"], required: true },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "has_spoiler", types: &["Boolean"], required: false },
            FieldSpec { name: "disable_notification", types: &["Boolean"], required: false },
            FieldSpec { name: "protect_content", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "sendAudio",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "audio", types: &["InputFile", "String"], required: true },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "duration", types: &["Integer"], required: false },
            FieldSpec { name: "performer", types: &["String"], required: false },
            FieldSpec { name: "title", types: &["String"], required: false },
            FieldSpec { name: "thumbnail", types: &["InputFile", "String"], required: false },
        ],
    },
    MethodSpec {
        name: "sendDocument",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "document", types: &["InputFile", "String"], required: true },
            FieldSpec { name: "thumbnail", types: &["InputFile", "String"], required: false },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "disable_content_type_detection", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "sendVideo",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "video", types: &["InputFile", "String"], required: true },
            FieldSpec { name: "duration", types: &["Integer"], required: false },
            FieldSpec { name: "width", types: &["Integer"], required: false },
            FieldSpec { name: "height", types: &["Integer"], required: false },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "supports_streaming", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "sendAnimation",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "animation", types: &["InputFile", "String"], required: true },
            FieldSpec { name: "duration", types: &["Integer"], required: false },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "sendVoice",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "voice", types: &["InputFile", "String"], required: true },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "duration", types: &["Integer"], required: false },
        ],
    },
    MethodSpec {
        name: "sendVideoNote",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "video_note", types: &["InputFile", "String"], required: true },
            FieldSpec { name: "duration", types: &["Integer"], required: false },
            FieldSpec { name: "length", types: &["Integer"], required: false },
        ],
    },
    MethodSpec {
        name: "sendLocation",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "latitude", types: &["Float"], required: true },
            FieldSpec { name: "longitude", types: &["Float"], required: true },
            FieldSpec { name: "horizontal_accuracy", types: &["Float"], required: false },
            FieldSpec { name: "live_period", types: &["Integer"], required: false },
            FieldSpec { name: "heading", types: &["Integer"], required: false },
        ],
    },
    MethodSpec {
        name: "sendVenue",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "latitude", types: &["Float"], required: true },
            FieldSpec { name: "longitude", types: &["Float"], required: true },
            FieldSpec { name: "title", types: &["String"], required: true },
            FieldSpec { name: "address", types: &["String"], required: true },
            FieldSpec { name: "foursquare_id", types: &["String"], required: false },
            FieldSpec { name: "foursquare_type", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "sendContact",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "phone_number", types: &["String"], required: true },
            FieldSpec { name: "first_name", types: &["String"], required: true },
            FieldSpec { name: "last_name", types: &["String"], required: false },
            FieldSpec { name: "vcard", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "sendPoll",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "question", types: &["String"], required: true },
            FieldSpec { name: "options", types: &["Array of InputPollOption"], required: true },
            FieldSpec { name: "is_anonymous", types: &["Boolean"], required: false },
            FieldSpec { name: "type", types: &["String"], required: false },
            FieldSpec { name: "allows_multiple_answers", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "sendDice",
        returns: &["Message"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_thread_id", types: &["Integer"], required: false },
            FieldSpec { name: "emoji", types: &["String"], required: false },
            FieldSpec { name: "disable_notification", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "sendChatAction",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_thread_id", types: &["Integer"], required: false },
            FieldSpec { name: "action", types: &["String"], required: true },
        ],
    },
    MethodSpec {
        name: "setMessageReaction",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_id", types: &["Integer"], required: true },
            FieldSpec { name: "reaction", types: &["Array of ReactionType"], required: false },
            FieldSpec { name: "is_big", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "getUserProfilePhotos",
        returns: &["UserProfilePhotos"],
        fields: &[
            FieldSpec { name: "user_id", types: &["Integer"], required: true },
            FieldSpec { name: "offset", types: &["Integer"], required: false },
            FieldSpec { name: "limit", types: &["Integer"], required: false },
        ],
    },
    MethodSpec {
        name: "getFile",
        returns: &["File"],
        fields: &[
            FieldSpec { name: "file_id", types: &["String"], required: true },
        ],
    },
    MethodSpec {
        name: "banChatMember",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "user_id", types: &["Integer"], required: true },
            FieldSpec { name: "until_date", types: &["Integer"], required: false },
            FieldSpec { name: "revoke_messages", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "unbanChatMember",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "user_id", types: &["Integer"], required: true },
            FieldSpec { name: "only_if_banned", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "restrictChatMember",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "user_id", types: &["Integer"], required: true },
            FieldSpec { name: "permissions", types: &["ChatPermissions"], required: true },
            FieldSpec { name: "until_date", types: &["Integer"], required: false },
        ],
    },
    MethodSpec {
        name: "promoteChatMember",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "user_id", types: &["Integer"], required: true },
            FieldSpec { name: "is_anonymous", types: &["Boolean"], required: false },
            FieldSpec { name: "can_manage_chat", types: &["Boolean"], required: false },
            FieldSpec { name: "can_delete_messages", types: &["Boolean"], required: false },
            FieldSpec { name: "can_restrict_members", types: &["Boolean"], required: false },
            FieldSpec { name: "can_promote_members", types: &["Boolean"], required: false },
            FieldSpec { name: "can_invite_users", types: &["Boolean"], required: false },
            FieldSpec { name: "can_pin_messages", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "exportChatInviteLink",
        returns: &["String"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
        ],
    },
    MethodSpec {
        name: "createChatInviteLink",
        returns: &["ChatInviteLink"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "name", types: &["String"], required: false },
            FieldSpec { name: "expire_date", types: &["Integer"], required: false },
            FieldSpec { name: "member_limit", types: &["Integer"], required: false },
            FieldSpec { name: "creates_join_request", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "revokeChatInviteLink",
        returns: &["ChatInviteLink"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "invite_link", types: &["String"], required: true },
        ],
    },
    MethodSpec {
        name: "setChatPhoto",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "photo", types: &["InputFile"], required: true },
        ],
    },
    MethodSpec {
        name: "deleteChatPhoto",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
        ],
    },
    MethodSpec {
        name: "setChatTitle",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "title", types: &["String"], required: true },
        ],
    },
    MethodSpec {
        name: "setChatDescription",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "description", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "pinChatMessage",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_id", types: &["Integer"], required: true },
            FieldSpec { name: "disable_notification", types: &["Boolean"], required: false },
        ],
    },
    MethodSpec {
        name: "unpinChatMessage",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_id", types: &["Integer"], required: false },
        ],
    },
    MethodSpec {
        name: "unpinAllChatMessages",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
        ],
    },
    MethodSpec {
        name: "leaveChat",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
        ],
    },
    MethodSpec {
        name: "getChat",
        returns: &["ChatFullInfo"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
        ],
    },
    MethodSpec {
        name: "getChatAdministrators",
        returns: &["Array of ChatMember"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
        ],
    },
    MethodSpec {
        name: "getChatMemberCount",
        returns: &["Integer"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
        ],
    },
    MethodSpec {
        name: "getChatMember",
        returns: &["ChatMember"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "user_id", types: &["Integer"], required: true },
        ],
    },
    MethodSpec {
        name: "setChatPermissions",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "permissions", types: &["ChatPermissions"], required: true },
        ],
    },
    MethodSpec {
        name: "createForumTopic",
        returns: &["ForumTopic"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "name", types: &["String"], required: true },
            FieldSpec { name: "icon_color", types: &["Integer"], required: false },
            FieldSpec { name: "icon_custom_emoji_id", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "answerCallbackQuery",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "callback_query_id", types: &["String"], required: true },
            FieldSpec { name: "text", types: &["String"], required: false },
            FieldSpec { name: "show_alert", types: &["Boolean"], required: false },
            FieldSpec { name: "url", types: &["String"], required: false },
            FieldSpec { name: "cache_time", types: &["Integer"], required: false },
        ],
    },
    MethodSpec {
        name: "answerInlineQuery",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "inline_query_id", types: &["String"], required: true },
            FieldSpec { name: "results", types: &["Array of InlineQueryResult"], required: true },
            FieldSpec { name: "cache_time", types: &["Integer"], required: false },
            FieldSpec { name: "is_personal", types: &["Boolean"], required: false },
            FieldSpec { name: "next_offset", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "answerWebAppQuery",
        returns: &["SentWebAppMessage"],
        fields: &[
            FieldSpec { name: "web_app_query_id", types: &["String"], required: true },
            FieldSpec { name: "result", types: &["InlineQueryResult"], required: true },
        ],
    },
    MethodSpec {
        name: "setMyCommands",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "commands", types: &["Array of BotCommand"], required: true },
            FieldSpec { name: "scope", types: &["BotCommandScope"], required: false },
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "deleteMyCommands",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "scope", types: &["BotCommandScope"], required: false },
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "getMyCommands",
        returns: &["Array of BotCommand"],
        fields: &[
            FieldSpec { name: "scope", types: &["BotCommandScope"], required: false },
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "setMyName",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "name", types: &["String"], required: false },
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "getMyName",
        returns: &["BotName"],
        fields: &[
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "setMyDescription",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "description", types: &["String"], required: false },
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "getMyDescription",
        returns: &["BotDescription"],
        fields: &[
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "setMyShortDescription",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "short_description", types: &["String"], required: false },
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "getMyShortDescription",
        returns: &["BotShortDescription"],
        fields: &[
            FieldSpec { name: "language_code", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "editMessageText",
        returns: &["Message", "Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: false },
            FieldSpec { name: "message_id", types: &["Integer"], required: false },
            FieldSpec { name: "inline_message_id", types: &["String"], required: false },
            FieldSpec { name: "text", types: &["String"], required: true },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
            FieldSpec { name: "reply_markup", types: &["InlineKeyboardMarkup"], required: false },
        ],
    },
    MethodSpec {
        name: "editMessageCaption",
        returns: &["Message", "Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: false },
            FieldSpec { name: "message_id", types: &["Integer"], required: false },
            FieldSpec { name: "inline_message_id", types: &["String"], required: false },
            FieldSpec { name: "caption", types: &["String"], required: false },
            FieldSpec { name: "parse_mode", types: &["String"], required: false },
        ],
    },
    MethodSpec {
        name: "editMessageReplyMarkup",
        returns: &["Message", "Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: false },
            FieldSpec { name: "message_id", types: &["Integer"], required: false },
            FieldSpec { name: "inline_message_id", types: &["String"], required: false },
            FieldSpec { name: "reply_markup", types: &["InlineKeyboardMarkup"], required: false },
        ],
    },
    MethodSpec {
        name: "stopPoll",
        returns: &["Poll"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_id", types: &["Integer"], required: true },
            FieldSpec { name: "reply_markup", types: &["InlineKeyboardMarkup"], required: false },
        ],
    },
    MethodSpec {
        name: "deleteMessage",
        returns: &["Boolean"],
        fields: &[
            FieldSpec { name: "chat_id", types: &["Integer", "String"], required: true },
            FieldSpec { name: "message_id", types: &["Integer"], required: true },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_method() {
        let spec = method_spec("sendMessage").unwrap();
        assert_eq!(spec.name, "sendMessage");
        assert_eq!(spec.returns[0], "Message");

        let required: Vec<&str> = spec
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["chat_id", "text"]);
    }

    #[test]
    fn test_lookup_unknown_method() {
        assert!(method_spec("sendTelepathy").is_none());
    }

    #[test]
    fn test_get_me_has_no_fields() {
        let spec = method_spec("getMe").unwrap();
        assert!(spec.fields.is_empty());
        assert_eq!(spec.returns, &["User"]);
    }

    #[test]
    fn test_method_names_unique() {
        let mut names: Vec<&str> = METHODS.iter().map(|m| m.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_every_method_has_primary_return() {
        for m in METHODS {
            assert!(!m.returns.is_empty(), "{} lacks a return type", m.name);
        }
    }
}
