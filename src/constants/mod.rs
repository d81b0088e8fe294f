use std::sync::LazyLock;

use fancy_regex::Regex;

pub mod version;

pub static POISE_VERSION: &str = "0.6.1";
pub static STARTUP_TIME: LazyLock<std::time::SystemTime> =
    LazyLock::new(std::time::SystemTime::now);

pub static QUOTED_ROLE_MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^> .*<@&\d+>.*$").unwrap());

pub static STATUS_ROTATION: [&str; 6] = [
    "keeping the guild tidy",
    "g>help for commands",
    "counting members",
    "reading bug reports",
    "watching over the server",
    "sweeping the channels",
];

pub static TEAM_ROLES: [(&str, &str); 3] = [
    ("admin", "admins"),
    ("mod", "mods"),
    ("support", "support team"),
];

pub const EMBED_COLOR: u32 = 0x005180;
pub const ERROR_COLOR: u32 = 0xCF0606;
