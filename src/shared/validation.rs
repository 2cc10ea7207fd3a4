use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating avatar upload filenames.
    /// The extension must be jpg, jpeg or png, matched case-insensitively.
    /// - Valid: "me.jpg", "photo.JPEG", "pic.png", "a.b.PNG"
    /// - Invalid: "file.gif", "archive.png.zip", "noextension"
    pub static ref AVATAR_FILENAME_REGEX: Regex =
        Regex::new(r"(?i)\.(jpg|jpeg|png)$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_filename_regex_valid() {
        assert!(AVATAR_FILENAME_REGEX.is_match("me.jpg"));
        assert!(AVATAR_FILENAME_REGEX.is_match("me.jpeg"));
        assert!(AVATAR_FILENAME_REGEX.is_match("me.png"));
        assert!(AVATAR_FILENAME_REGEX.is_match("me.JPG"));
        assert!(AVATAR_FILENAME_REGEX.is_match("photo.JPEG"));
        assert!(AVATAR_FILENAME_REGEX.is_match("a.b.PNG"));
    }

    #[test]
    fn test_avatar_filename_regex_invalid() {
        assert!(!AVATAR_FILENAME_REGEX.is_match("file.gif")); // wrong extension
        assert!(!AVATAR_FILENAME_REGEX.is_match("archive.png.zip")); // extension not last
        assert!(!AVATAR_FILENAME_REGEX.is_match("noextension")); // no extension
        assert!(!AVATAR_FILENAME_REGEX.is_match("")); // empty
        assert!(!AVATAR_FILENAME_REGEX.is_match("jpg")); // bare word, no dot
    }
}
