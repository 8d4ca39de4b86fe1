//! Default values for serde `default = "..."` attributes.

pub fn bool_true() -> bool {
    true
}

pub fn channel_name() -> String {
    "emoji_picker".to_string()
}

pub fn cache_size() -> usize {
    1024
}
