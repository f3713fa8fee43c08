//! Per-type generators for Bot API objects.
//!
//! Each generator consults the request parameters and echoes identifying
//! fields back (chat ids, text, captions, file ids), so responses look like
//! the real API acknowledged the exact request.

use chrono::Utc;
use rand::rngs::StdRng;
use serde_json::{json, Map, Value};

use super::values::{
    self, author, choice, file_id, param_f64, param_i64, param_str, rand_bool, rand_f64, rand_i64,
    short_id, text, title, username, FIRST_NAMES, LAST_NAMES, MIME_TYPES,
};
use super::Faker;

fn obj(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("generator built a non-object"),
    }
}

/// Dispatch to the generator for a spec type name.
/// Returns None for types without a registered generator.
pub(crate) fn generate(
    f: &Faker,
    rng: &mut StdRng,
    type_name: &str,
    params: &Map<String, Value>,
) -> Option<Map<String, Value>> {
    let result = match type_name {
        // Core types
        "User" => user(f, rng, params),
        "Chat" => chat(f, rng, params),
        "ChatFullInfo" => chat_full_info(f, rng, params),
        "Message" => message(f, rng, params),
        "MessageId" => message_id(f),
        "File" => file(rng, params),
        "Update" => update(f),

        // Media types
        "PhotoSize" => photo_size(rng),
        "Audio" => audio(rng),
        "Document" => document(rng),
        "Video" => video(rng),
        "Animation" => animation(rng),
        "Voice" => voice(rng),
        "VideoNote" => video_note(rng),
        "Sticker" => sticker(rng),
        "Contact" => contact(rng),
        "Location" => location(rng, params),
        "Venue" => venue(rng, params),
        "Poll" => poll(rng),
        "Dice" => dice(rng, params),

        // Chat-related types
        "ChatMember" | "ChatMemberMember" => chat_member_member(f, rng, params),
        "ChatMemberOwner" => chat_member_owner(f, rng, params),
        "ChatMemberAdministrator" => chat_member_administrator(f, rng, params),
        "ChatInviteLink" => chat_invite_link(f, rng, params),
        "ChatPhoto" => chat_photo(rng),
        "ChatPermissions" => chat_permissions(rng),

        // Inline types
        "InlineQuery" => inline_query(f, rng, params),
        "ChosenInlineResult" => chosen_inline_result(f, rng, params),
        "CallbackQuery" => callback_query(f, rng, params),

        // Keyboard types
        "InlineKeyboardMarkup" => obj(json!({"inline_keyboard": []})),
        "InlineKeyboardButton" => {
            obj(json!({"text": "Button", "callback_data": values::string_value(rng, "callback_data")}))
        }
        "ReplyKeyboardMarkup" => obj(json!({"keyboard": [], "resize_keyboard": true})),
        "KeyboardButton" => obj(json!({"text": "Button"})),

        // Other types
        "WebhookInfo" => obj(json!({
            "url": "",
            "has_custom_certificate": false,
            "pending_update_count": 0,
        })),
        "BotCommand" => obj(json!({
            "command": choice(rng, values::COMMANDS),
            "description": text(rng),
        })),
        "BotDescription" => obj(json!({"description": text(rng)})),
        "BotName" => obj(json!({"name": title(rng)})),
        "BotShortDescription" => obj(json!({"short_description": text(rng)})),
        "MessageEntity" => obj(json!({
            "type": choice(rng, &["bold", "italic", "code", "mention", "hashtag", "url"]),
            "offset": 0,
            "length": rand_i64(rng, 1, 20),
        })),
        "UserProfilePhotos" => obj(json!({
            "total_count": 1,
            "photos": [photo_sizes(rng)],
        })),
        "ForumTopic" => obj(json!({
            "message_thread_id": rand_i64(rng, 1, 10000),
            "name": title(rng),
            "icon_color": rand_i64(rng, 0, 16777215),
        })),
        "SentWebAppMessage" => obj(json!({"inline_message_id": short_id(rng, 30)})),

        _ => return None,
    };

    Some(result)
}

// Core type generators

fn user(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    let user_id = param_i64(params, "user_id").unwrap_or_else(|| f.next_user_id() + 100_000_000);

    let mut user = obj(json!({
        "id": user_id,
        "is_bot": false,
        "first_name": choice(rng, FIRST_NAMES),
    }));

    if rand_bool(rng, 0.7) {
        user.insert("last_name".into(), json!(choice(rng, LAST_NAMES)));
    }
    if rand_bool(rng, 0.8) {
        user.insert("username".into(), json!(username(rng)));
    }
    if rand_bool(rng, 0.5) {
        user.insert(
            "language_code".into(),
            json!(values::string_value(rng, "language_code")),
        );
    }
    if rand_bool(rng, 0.3) {
        user.insert("is_premium".into(), json!(true));
    }

    user
}

fn chat(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    let chat_id = param_i64(params, "chat_id").unwrap_or_else(|| f.next_chat_id());

    // Negative ids are groups and channels; the -10^12 range is channels
    let chat_type = if chat_id < 0 {
        if chat_id <= -1_000_000_000_000 {
            "channel"
        } else {
            choice(rng, &["group", "supergroup"])
        }
    } else {
        "private"
    };

    let mut chat = obj(json!({"id": chat_id, "type": chat_type}));

    match chat_type {
        "private" => {
            chat.insert("first_name".into(), json!(choice(rng, FIRST_NAMES)));
            if rand_bool(rng, 0.7) {
                chat.insert("last_name".into(), json!(choice(rng, LAST_NAMES)));
            }
            if rand_bool(rng, 0.8) {
                chat.insert("username".into(), json!(username(rng)));
            }
        }
        "group" | "supergroup" => {
            chat.insert("title".into(), json!(title(rng)));
            if rand_bool(rng, 0.6) {
                chat.insert("username".into(), json!(username(rng)));
            }
        }
        _ => {
            chat.insert("title".into(), json!(title(rng)));
            if rand_bool(rng, 0.8) {
                chat.insert("username".into(), json!(username(rng)));
            }
        }
    }

    chat
}

fn chat_full_info(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    let mut chat = chat(f, rng, params);

    chat.insert("accent_color_id".into(), json!(rand_i64(rng, 0, 20)));
    chat.insert("max_reaction_count".into(), json!(11));

    if rand_bool(rng, 0.6) {
        chat.insert("photo".into(), Value::Object(chat_photo(rng)));
    }
    if rand_bool(rng, 0.5) {
        chat.insert("bio".into(), json!(text(rng)));
    }
    if rand_bool(rng, 0.4) {
        chat.insert("description".into(), json!(text(rng)));
    }

    chat
}

fn message(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    let chat_id = param_i64(params, "chat_id").unwrap_or(1);

    let chat_params = obj(json!({"chat_id": chat_id}));
    let chat = chat(f, rng, &chat_params);
    let chat_type = chat.get("type").and_then(Value::as_str).unwrap_or("private").to_string();

    let mut msg = Map::new();
    msg.insert("message_id".into(), json!(f.next_message_id()));
    msg.insert("date".into(), json!(Utc::now().timestamp()));
    msg.insert("chat".into(), Value::Object(chat));

    // Channel posts carry no sender
    if chat_type != "channel" {
        msg.insert("from".into(), Value::Object(user(f, rng, params)));
    }

    if let Some(text) = param_str(params, "text") {
        msg.insert("text".into(), json!(text));
    }
    if let Some(caption) = param_str(params, "caption") {
        msg.insert("caption".into(), json!(caption));
    }

    // Attach the media sub-object matching the request parameter
    if params.contains_key("photo") {
        msg.insert("photo".into(), photo_sizes(rng));
    }
    if params.contains_key("document") {
        msg.insert("document".into(), Value::Object(document(rng)));
    }
    if params.contains_key("audio") {
        msg.insert("audio".into(), Value::Object(audio(rng)));
    }
    if params.contains_key("video") {
        msg.insert("video".into(), Value::Object(video(rng)));
    }
    if params.contains_key("voice") {
        msg.insert("voice".into(), Value::Object(voice(rng)));
    }
    if params.contains_key("video_note") {
        msg.insert("video_note".into(), Value::Object(video_note(rng)));
    }
    if params.contains_key("animation") {
        msg.insert("animation".into(), Value::Object(animation(rng)));
    }
    if params.contains_key("sticker") {
        msg.insert("sticker".into(), Value::Object(sticker(rng)));
    }
    if params.contains_key("location") || params.contains_key("latitude") {
        msg.insert("location".into(), Value::Object(location(rng, params)));
    }
    if params.contains_key("venue") {
        msg.insert("venue".into(), Value::Object(venue(rng, params)));
    }
    if params.contains_key("contact") {
        msg.insert("contact".into(), Value::Object(contact(rng)));
    }
    if params.contains_key("question") {
        msg.insert("poll".into(), Value::Object(poll(rng)));
    }
    if params.contains_key("emoji") && !params.contains_key("sticker") {
        msg.insert("dice".into(), Value::Object(dice(rng, params)));
    }

    msg
}

fn message_id(f: &Faker) -> Map<String, Value> {
    obj(json!({"message_id": f.next_message_id()}))
}

fn file(rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    let file_id = param_str(params, "file_id")
        .map(str::to_string)
        .unwrap_or_else(|| file_id(rng));

    let unique_len = file_id.len().min(8);
    let unique_id = format!("unique_{}", &file_id[..unique_len]);

    obj(json!({
        "file_id": file_id,
        "file_unique_id": unique_id,
        "file_size": rand_i64(rng, 1024, 1024 * 1024 * 10),
        "file_path": values::file_path(rng),
    }))
}

fn update(f: &Faker) -> Map<String, Value> {
    obj(json!({"update_id": f.next_update_id()}))
}

// Media type generators

fn photo_size(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "width": rand_i64(rng, 100, 1920),
        "height": rand_i64(rng, 100, 1080),
        "file_size": rand_i64(rng, 1024, 1024 * 500),
    }))
}

/// The standard three photo renditions: small, medium, large.
fn photo_sizes(rng: &mut StdRng) -> Value {
    let dimensions: [(i64, i64); 3] = [(90, 90), (320, 320), (800, 800)];
    let sizes: Vec<Value> = dimensions
        .iter()
        .enumerate()
        .map(|(i, (w, h))| {
            json!({
                "file_id": file_id(rng),
                "file_unique_id": short_id(rng, 20),
                "width": w,
                "height": h,
                "file_size": rand_i64(rng, 1024, 1024 * 100 * (i as i64 + 1)),
            })
        })
        .collect();
    Value::Array(sizes)
}

fn audio(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "duration": rand_i64(rng, 30, 300),
        "performer": author(rng),
        "title": title(rng),
        "mime_type": "audio/mpeg",
        "file_size": rand_i64(rng, 1024 * 100, 1024 * 1024 * 10),
    }))
}

fn document(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "file_name": values::file_path(rng),
        "mime_type": choice(rng, MIME_TYPES),
        "file_size": rand_i64(rng, 1024, 1024 * 1024 * 50),
    }))
}

fn video(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "width": rand_i64(rng, 320, 1920),
        "height": rand_i64(rng, 240, 1080),
        "duration": rand_i64(rng, 5, 600),
        "mime_type": "video/mp4",
        "file_size": rand_i64(rng, 1024 * 100, 1024 * 1024 * 100),
    }))
}

fn animation(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "width": rand_i64(rng, 100, 500),
        "height": rand_i64(rng, 100, 500),
        "duration": rand_i64(rng, 1, 10),
        "mime_type": "video/mp4",
        "file_size": rand_i64(rng, 1024 * 10, 1024 * 1024 * 5),
    }))
}

fn voice(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "duration": rand_i64(rng, 1, 120),
        "mime_type": "audio/ogg",
        "file_size": rand_i64(rng, 1024, 1024 * 1024),
    }))
}

fn video_note(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "length": rand_i64(rng, 200, 500),
        "duration": rand_i64(rng, 1, 60),
        "file_size": rand_i64(rng, 1024 * 100, 1024 * 1024 * 10),
    }))
}

fn sticker(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "file_id": file_id(rng),
        "file_unique_id": short_id(rng, 20),
        "type": choice(rng, &["regular", "mask", "custom_emoji"]),
        "width": 512,
        "height": 512,
        "is_animated": rand_bool(rng, 0.3),
        "is_video": rand_bool(rng, 0.2),
        "file_size": rand_i64(rng, 1024 * 10, 1024 * 100),
    }))
}

fn contact(rng: &mut StdRng) -> Map<String, Value> {
    let mut contact = obj(json!({
        "phone_number": values::phone_number(rng),
        "first_name": choice(rng, FIRST_NAMES),
    }));
    if rand_bool(rng, 0.7) {
        contact.insert("last_name".into(), json!(choice(rng, LAST_NAMES)));
    }
    if rand_bool(rng, 0.5) {
        contact.insert("user_id".into(), json!(rand_i64(rng, 100_000_000, 999_999_999)));
    }
    contact
}

fn location(rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    let latitude = param_f64(params, "latitude").unwrap_or_else(|| rand_f64(rng, -90.0, 90.0));
    let longitude = param_f64(params, "longitude").unwrap_or_else(|| rand_f64(rng, -180.0, 180.0));

    let mut loc = obj(json!({"latitude": latitude, "longitude": longitude}));
    if rand_bool(rng, 0.3) {
        loc.insert("horizontal_accuracy".into(), json!(rand_f64(rng, 0.0, 100.0)));
    }
    loc
}

fn venue(rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "location": location(rng, params),
        "title": title(rng),
        "address": text(rng),
        "foursquare_id": short_id(rng, 24),
        "foursquare_type": "food/restaurant",
    }))
}

fn poll(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "id": short_id(rng, 17),
        "question": text(rng),
        "options": [],
        "total_voter_count": rand_i64(rng, 0, 100),
        "is_closed": false,
        "is_anonymous": true,
        "type": "regular",
        "allows_multiple_answers": false,
    }))
}

fn dice(rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    let emoji = param_str(params, "emoji").unwrap_or("🎲").to_string();

    let max_value: i64 = match emoji.as_str() {
        "🏀" | "⚽" => 5,
        "🎰" => 64,
        _ => 6,
    };

    obj(json!({
        "emoji": emoji,
        "value": rand_i64(rng, 1, max_value + 1),
    }))
}

// Chat member generators

fn chat_member_member(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "status": "member",
        "user": user(f, rng, params),
    }))
}

fn chat_member_owner(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "status": "creator",
        "user": user(f, rng, params),
        "is_anonymous": rand_bool(rng, 0.2),
    }))
}

fn chat_member_administrator(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "status": "administrator",
        "user": user(f, rng, params),
        "can_be_edited": true,
        "is_anonymous": rand_bool(rng, 0.2),
        "can_manage_chat": true,
        "can_delete_messages": true,
        "can_manage_video_chats": true,
        "can_restrict_members": true,
        "can_promote_members": rand_bool(rng, 0.5),
        "can_change_info": true,
        "can_invite_users": true,
        "can_post_messages": true,
        "can_edit_messages": true,
        "can_pin_messages": true,
    }))
}

fn chat_invite_link(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "invite_link": format!("https://t.me/+{}", short_id(rng, 16)),
        "creator": user(f, rng, params),
        "creates_join_request": rand_bool(rng, 0.3),
        "is_primary": rand_bool(rng, 0.5),
        "is_revoked": false,
    }))
}

fn chat_photo(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "small_file_id": file_id(rng),
        "small_file_unique_id": short_id(rng, 20),
        "big_file_id": file_id(rng),
        "big_file_unique_id": short_id(rng, 20),
    }))
}

fn chat_permissions(rng: &mut StdRng) -> Map<String, Value> {
    obj(json!({
        "can_send_messages": true,
        "can_send_audios": true,
        "can_send_documents": true,
        "can_send_photos": true,
        "can_send_videos": true,
        "can_send_video_notes": true,
        "can_send_voice_notes": true,
        "can_send_polls": true,
        "can_send_other_messages": true,
        "can_add_web_page_previews": true,
        "can_change_info": rand_bool(rng, 0.5),
        "can_invite_users": true,
        "can_pin_messages": rand_bool(rng, 0.5),
    }))
}

// Inline type generators

fn inline_query(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "id": short_id(rng, 20),
        "from": user(f, rng, params),
        "query": values::query(rng),
        "offset": "",
    }))
}

fn chosen_inline_result(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "result_id": short_id(rng, 20),
        "from": user(f, rng, params),
        "query": values::query(rng),
        "inline_message_id": short_id(rng, 30),
    }))
}

fn callback_query(f: &Faker, rng: &mut StdRng, params: &Map<String, Value>) -> Map<String, Value> {
    obj(json!({
        "id": short_id(rng, 20),
        "from": user(f, rng, params),
        "chat_instance": short_id(rng, 15),
        "data": values::string_value(rng, "callback_data"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_message_reflects_chat_id_and_text() {
        let faker = Faker::new(1);
        let result = faker.generate("Message", &params(json!({"chat_id": 123, "text": "Hello"})));

        assert_eq!(result["chat"]["id"], 123);
        assert_eq!(result["chat"]["type"], "private");
        assert_eq!(result["text"], "Hello");
        assert!(result["message_id"].is_i64());
        assert!(result["from"].is_object());
    }

    #[test]
    fn test_message_reflects_caption_and_media() {
        let faker = Faker::new(1);
        let result = faker.generate(
            "Message",
            &params(json!({"chat_id": 5, "photo": "attach://x", "caption": "pic"})),
        );

        assert_eq!(result["caption"], "pic");
        assert_eq!(result["photo"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_chat_type_from_id_sign() {
        let faker = Faker::new(1);

        let private = faker.generate("Chat", &params(json!({"chat_id": 7})));
        assert_eq!(private["type"], "private");

        let group = faker.generate("Chat", &params(json!({"chat_id": -5})));
        let group_type = group["type"].as_str().unwrap();
        assert!(group_type == "group" || group_type == "supergroup");

        let channel = faker.generate("Chat", &params(json!({"chat_id": -1_000_000_000_001i64})));
        assert_eq!(channel["type"], "channel");
        assert!(channel["title"].is_string());
    }

    #[test]
    fn test_channel_message_has_no_from() {
        let faker = Faker::new(1);
        let result = faker.generate("Message", &params(json!({"chat_id": -1_000_000_000_001i64})));
        assert!(result.get("from").is_none());
    }

    #[test]
    fn test_file_echoes_file_id() {
        let faker = Faker::new(1);
        let result = faker.generate("File", &params(json!({"file_id": "my-file-id-12345"})));
        assert_eq!(result["file_id"], "my-file-id-12345");
        assert_eq!(result["file_unique_id"], "unique_my-file-");
    }

    #[test]
    fn test_user_echoes_user_id() {
        let faker = Faker::new(1);
        let result = faker.generate("User", &params(json!({"user_id": 424242})));
        assert_eq!(result["id"], 424242);
    }

    #[test]
    fn test_user_accepts_float_and_string_ids() {
        let faker = Faker::new(1);
        assert_eq!(faker.generate("User", &params(json!({"user_id": 424242.0})))["id"], 424242);
        assert_eq!(faker.generate("User", &params(json!({"user_id": "424242"})))["id"], 424242);
    }

    #[test]
    fn test_location_reflects_coordinates() {
        let faker = Faker::new(1);
        let result = faker.generate(
            "Message",
            &params(json!({"chat_id": 1, "latitude": 51.5, "longitude": -0.12})),
        );
        assert_eq!(result["location"]["latitude"], 51.5);
        assert_eq!(result["location"]["longitude"], -0.12);
    }

    #[test]
    fn test_dice_honors_emoji() {
        let faker = Faker::new(1);
        let result = faker.generate("Dice", &params(json!({"emoji": "🎰"})));
        assert_eq!(result["emoji"], "🎰");
        let value = result["value"].as_i64().unwrap();
        assert!((1..=64).contains(&value));
    }

    #[test]
    fn test_chat_member_variants() {
        let faker = Faker::new(1);
        let owner = faker.generate("ChatMemberOwner", &Map::new());
        assert_eq!(owner["status"], "creator");

        let admin = faker.generate("ChatMemberAdministrator", &Map::new());
        assert_eq!(admin["status"], "administrator");
        assert_eq!(admin["can_manage_chat"], true);

        let member = faker.generate("ChatMember", &Map::new());
        assert_eq!(member["status"], "member");
    }

    #[test]
    fn test_user_profile_photos_shape() {
        let faker = Faker::new(1);
        let result = faker.generate("UserProfilePhotos", &Map::new());
        assert_eq!(result["total_count"], 1);
        assert_eq!(result["photos"][0].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_webhook_info_defaults() {
        let faker = Faker::new(1);
        let result = faker.generate("WebhookInfo", &Map::new());
        assert_eq!(result["url"], "");
        assert_eq!(result["has_custom_certificate"], false);
        assert_eq!(result["pending_update_count"], 0);
    }
}
