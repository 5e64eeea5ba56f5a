use std::fmt::Write;
use std::str::FromStr;

use crate::error::PageError;

pub const SHARE_WINDOW_FEATURES: &str = "width=600,height=400";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Twitter,
    Facebook,
    LinkedIn,
    Email,
}

impl Platform {
    pub fn all() -> [Platform; 4] {
        [Self::Twitter, Self::Facebook, Self::LinkedIn, Self::Email]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::Email => "Email",
        }
    }

    /// Builds the outbound share link for a page.
    pub fn share_url(&self, page_url: &str, title: &str) -> String {
        let url = encode_uri_component(page_url);
        let title = encode_uri_component(title);
        match self {
            Self::Twitter => format!("https://twitter.com/intent/tweet?url={url}&text={title}"),
            Self::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            Self::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
            }
            Self::Email => format!("mailto:?subject={title}&body={url}"),
        }
    }
}

impl FromStr for Platform {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PageError::UnknownPlatform(s.to_string()))
    }
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// matching the browser's `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(
            encode_uri_component("https://tools.dev/a b?x=1&y=2#top"),
            "https%3A%2F%2Ftools.dev%2Fa%20b%3Fx%3D1%26y%3D2%23top"
        );
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_share_urls() {
        let url = "https://tools.dev/guide";
        let title = "Tools & Tips";
        assert_eq!(
            Platform::Twitter.share_url(url, title),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Ftools.dev%2Fguide&text=Tools%20%26%20Tips"
        );
        assert_eq!(
            Platform::Facebook.share_url(url, title),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Ftools.dev%2Fguide"
        );
        assert_eq!(
            Platform::LinkedIn.share_url(url, title),
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Ftools.dev%2Fguide"
        );
        assert_eq!(
            Platform::Email.share_url(url, title),
            "mailto:?subject=Tools%20%26%20Tips&body=https%3A%2F%2Ftools.dev%2Fguide"
        );
    }

    #[test]
    fn test_platform_parse() {
        for platform in Platform::all() {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
        assert_eq!(
            "myspace".parse::<Platform>(),
            Err(PageError::UnknownPlatform("myspace".to_string()))
        );
        // platform names are case sensitive, like the data attributes
        assert!("Twitter".parse::<Platform>().is_err());
    }
}
