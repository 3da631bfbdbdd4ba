/// Turns a stored media path into the URL clients fetch it from.
///
/// Absolute `http(s)://` values pass through unchanged; relative paths are joined to
/// `media_url`, which always ends in `/`.
pub fn media_url(media_url: &str, path: Option<&str>) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;

    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }

    Some(format!("{}{}", media_url, path.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_path() {
        assert_eq!(
            media_url("/media/", Some("lojas/logo.png")),
            Some("/media/lojas/logo.png".to_string())
        );
        assert_eq!(
            media_url("/media/", Some("/lojas/logo.png")),
            Some("/media/lojas/logo.png".to_string())
        );
    }

    #[test]
    fn keeps_absolute_url() {
        assert_eq!(
            media_url("/media/", Some("https://cdn.example.com/a.png")),
            Some("https://cdn.example.com/a.png".to_string())
        );
    }

    #[test]
    fn empty_path_is_none() {
        assert_eq!(media_url("/media/", None), None);
        assert_eq!(media_url("/media/", Some("")), None);
    }
}
