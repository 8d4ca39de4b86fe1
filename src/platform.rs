//! Host platform description for `getPlatformVersion`.

use sysinfo::System;

/// Human-readable OS name and version, e.g. `"Linux 6.8.0"` or `"macOS 15.1"`.
pub fn platform_version() -> String {
    describe(System::name(), System::os_version())
}

fn describe(name: Option<String>, version: Option<String>) -> String {
    let name = name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| std::env::consts::OS.to_string());
    match version.filter(|v| !v.trim().is_empty()) {
        Some(version) => format!("{name} {version}"),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_with_version() {
        assert_eq!(
            describe(Some("Darwin".into()), Some("15.1".into())),
            "Darwin 15.1"
        );
    }

    #[test]
    fn test_describe_falls_back_to_build_os() {
        assert_eq!(describe(None, None), std::env::consts::OS);
        assert_eq!(
            describe(Some(" ".into()), Some("1".into())),
            format!("{} 1", std::env::consts::OS)
        );
    }

    #[test]
    fn test_platform_version_is_not_empty() {
        assert!(!platform_version().is_empty());
    }
}
