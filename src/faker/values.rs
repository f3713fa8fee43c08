//! Leaf value generation: name-based heuristics and sample data sets.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use serde_json::{Map, Value};

// Random helpers

/// Random i64 in `[min, max)`; returns `min` when the range is empty.
pub(crate) fn rand_i64(rng: &mut StdRng, min: i64, max: i64) -> i64 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

pub(crate) fn rand_f64(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

pub(crate) fn rand_bool(rng: &mut StdRng, true_probability: f64) -> bool {
    rng.gen::<f64>() < true_probability
}

pub(crate) fn choice<'a>(rng: &mut StdRng, choices: &[&'a str]) -> &'a str {
    choices[rng.gen_range(0..choices.len())]
}

// Parameter coercion. Query parameters arrive as strings and JSON bodies may
// carry integers or floats; identifying fields accept all three.

pub(crate) fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

pub(crate) fn param_i64(params: &Map<String, Value>, key: &str) -> Option<i64> {
    params.get(key).and_then(value_as_i64)
}

pub(crate) fn param_str<'a>(params: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    params.get(key).and_then(Value::as_str)
}

pub(crate) fn param_f64(params: &Map<String, Value>, key: &str) -> Option<f64> {
    match params.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse::<f64>().ok(),
        _ => None,
    }
}

/// Generate a realistic string for a field, keyed off its name.
pub(crate) fn string_value(rng: &mut StdRng, field_name: &str) -> String {
    let name = field_name.to_ascii_lowercase();

    if name.ends_with("_id") || name.ends_with("id") {
        return file_id(rng);
    }
    if name == "username" {
        return username(rng);
    }
    if name == "first_name" {
        return choice(rng, FIRST_NAMES).to_string();
    }
    if name == "last_name" {
        return choice(rng, LAST_NAMES).to_string();
    }
    if name == "name" || name == "title" {
        return title(rng);
    }
    if name == "text" || name == "caption" || name == "description" {
        return text(rng);
    }
    if name.ends_with("_url") || name == "url" || name == "href" {
        return url(rng);
    }
    if name.ends_with("_path") || name == "file_path" {
        return file_path(rng);
    }
    if name == "email" {
        return email(rng);
    }
    if name == "phone_number" {
        return phone_number(rng);
    }
    if name == "language_code" {
        return choice(rng, LANGUAGE_CODES).to_string();
    }
    if name == "type" || name == "status" {
        return "default".to_string();
    }
    if name == "currency" {
        return choice(rng, CURRENCIES).to_string();
    }
    if name == "emoji" || name.ends_with("_emoji") {
        return choice(rng, EMOJIS).to_string();
    }
    if name == "command" {
        return format!("/{}", choice(rng, COMMANDS));
    }
    if name == "query" || name == "inline_query" {
        return choice(rng, QUERIES).to_string();
    }
    if name == "mime_type" {
        return choice(rng, MIME_TYPES).to_string();
    }
    if name == "performer" || name == "author" || name == "author_signature" {
        return author(rng);
    }

    format!("{}_{}", field_name, rand_i64(rng, 0, 10000))
}

/// Generate a realistic integer for a field, keyed off its name.
pub(crate) fn int_value(rng: &mut StdRng, field_name: &str) -> i64 {
    let name = field_name.to_ascii_lowercase();

    if name.ends_with("_id") || name == "id" {
        return rand_i64(rng, 100_000_000, 999_999_999);
    }
    if name == "date" || name.ends_with("_date") || name.ends_with("_time") {
        return Utc::now().timestamp();
    }
    if name.ends_with("_count") || name == "count" {
        return rand_i64(rng, 1, 100);
    }
    if name.ends_with("_size") || name == "size" {
        return rand_i64(rng, 1024, 1024 * 1024);
    }
    if name == "duration" {
        return rand_i64(rng, 1, 600);
    }
    if name == "width" || name == "height" {
        return rand_i64(rng, 100, 1920);
    }
    if name == "offset" || name == "length" {
        return rand_i64(rng, 0, 100);
    }
    if name == "message_thread_id" {
        return rand_i64(rng, 1, 10000);
    }

    rand_i64(rng, 1, 1000)
}

// Sample data generators

pub(crate) fn file_id(rng: &mut StdRng) -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
    let length = 40 + rand_i64(rng, 0, 20) as usize;
    let mut id = String::with_capacity(11 + length);
    id.push_str("AgACAgIAAxk");
    for _ in 0..length {
        id.push(CHARS[rng.gen_range(0..CHARS.len())] as char);
    }
    id
}

/// A short identifier cut from a fresh file id.
pub(crate) fn short_id(rng: &mut StdRng, len: usize) -> String {
    let id = file_id(rng);
    id[..len.min(id.len())].to_string()
}

pub(crate) fn username(rng: &mut StdRng) -> String {
    format!(
        "{}_{}_{}",
        choice(rng, USERNAME_ADJECTIVES),
        choice(rng, USERNAME_NOUNS),
        rand_i64(rng, 0, 1000)
    )
}

pub(crate) fn title(rng: &mut StdRng) -> String {
    format!("{} {}", choice(rng, TITLE_ADJECTIVES), choice(rng, TITLE_NOUNS))
}

pub(crate) fn text(rng: &mut StdRng) -> String {
    let sentences = 1 + rand_i64(rng, 0, 3);
    let mut parts = Vec::with_capacity(sentences as usize);
    for _ in 0..sentences {
        parts.push(choice(rng, SAMPLE_SENTENCES));
    }
    parts.join(" ")
}

pub(crate) fn url(rng: &mut StdRng) -> String {
    format!("https://{}/{}", choice(rng, DOMAINS), choice(rng, URL_PATHS))
}

pub(crate) fn file_path(rng: &mut StdRng) -> String {
    format!(
        "{}/file_{}.{}",
        choice(rng, FOLDERS),
        rand_i64(rng, 0, 10000),
        choice(rng, EXTENSIONS)
    )
}

pub(crate) fn email(rng: &mut StdRng) -> String {
    format!(
        "{}{}@{}",
        choice(rng, FIRST_NAMES).to_ascii_lowercase(),
        rand_i64(rng, 0, 100),
        choice(rng, EMAIL_DOMAINS)
    )
}

pub(crate) fn phone_number(rng: &mut StdRng) -> String {
    let mut number = String::with_capacity(10);
    for _ in 0..10 {
        number.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    format!("+{}{}", choice(rng, COUNTRY_CODES), number)
}

pub(crate) fn query(rng: &mut StdRng) -> String {
    choice(rng, QUERIES).to_string()
}

pub(crate) fn author(rng: &mut StdRng) -> String {
    format!("{} {}", choice(rng, FIRST_NAMES), choice(rng, LAST_NAMES))
}

// Data sets

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Alex", "Emma", "James", "Sophia", "Michael", "Olivia", "William", "Ava",
    "John", "Isabella", "David", "Mia", "Richard", "Charlotte", "Joseph", "Amelia",
    "Thomas", "Harper", "Daniel", "Evelyn", "Matthew", "Abigail", "Andrew", "Emily",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
];

const USERNAME_ADJECTIVES: &[&str] = &[
    "cool", "fast", "smart", "happy", "lucky", "super", "mega", "ultra",
    "pro", "elite", "top", "best", "great", "awesome", "epic", "legend",
];

const USERNAME_NOUNS: &[&str] = &[
    "user", "coder", "dev", "hacker", "ninja", "wizard", "master", "guru",
    "bot", "player", "gamer", "creator", "maker", "builder", "runner", "rider",
];

const TITLE_ADJECTIVES: &[&str] = &[
    "Official", "Amazing", "Awesome", "Great", "Super", "Best", "Top", "Premium",
    "Elite", "Pro", "Ultimate", "Fantastic", "Incredible", "Wonderful", "Excellent",
];

const TITLE_NOUNS: &[&str] = &[
    "Group", "Channel", "Community", "Team", "Club", "Network", "Hub", "Center",
    "Zone", "Space", "Place", "World", "Universe", "Kingdom", "Empire",
];

const SAMPLE_SENTENCES: &[&str] = &[
    "Hello, this is a test message.",
    "Welcome to the group!",
    "Thank you for your message.",
    "That's a great question!",
    "I'll get back to you soon.",
    "Please check the documentation.",
    "Have a wonderful day!",
    "Let me know if you need help.",
];

const DOMAINS: &[&str] = &[
    "example.com", "test.org", "sample.net", "demo.io", "mock.dev",
    "telegram.org", "api.example.com", "cdn.example.com",
];

const URL_PATHS: &[&str] = &[
    "page", "article/123", "post/456", "image.jpg", "document.pdf",
    "api/v1/data", "files/download", "media/photo",
];

pub(crate) const FOLDERS: &[&str] = &[
    "photos", "documents", "videos", "voice", "stickers", "animations", "music",
];

const EXTENSIONS: &[&str] = &["jpg", "png", "gif", "mp4", "mp3", "ogg", "pdf", "doc", "webp", "tgs"];

const EMAIL_DOMAINS: &[&str] = &["example.com", "test.org", "mail.com", "email.net", "inbox.io"];

const COUNTRY_CODES: &[&str] = &["1", "7", "44", "49", "33", "39", "34", "81", "86", "91"];

const LANGUAGE_CODES: &[&str] = &[
    "en", "ru", "de", "fr", "es", "it", "pt", "ja", "zh", "ko", "ar", "hi",
];

const CURRENCIES: &[&str] = &[
    "USD", "EUR", "GBP", "RUB", "JPY", "CNY", "INR", "BRL", "KRW", "TRY",
];

const EMOJIS: &[&str] = &["👍", "❤️", "🔥", "👏", "😊", "🎉", "💪", "✨", "🚀", "💯"];

pub(crate) const MIME_TYPES: &[&str] = &[
    "image/jpeg", "image/png", "image/gif", "video/mp4", "audio/mpeg",
    "audio/ogg", "application/pdf", "text/plain", "application/json",
];

pub(crate) const COMMANDS: &[&str] = &[
    "start", "help", "settings", "about", "cancel", "menu", "status", "info",
];

const QUERIES: &[&str] = &["search query", "example", "test", "hello world", "sample text"];
