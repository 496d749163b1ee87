use anyhow::{anyhow, bail, Result};
use url::Url;

pub fn validate_http_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("url must not be empty");
    }
    let parsed = Url::parse(trimmed).map_err(|err| anyhow!("invalid url '{trimmed}': {err}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(anyhow!("only http or https urls are allowed, got '{scheme}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_project_url() {
        let url = validate_http_url(" https://project.supabase.co ").unwrap();
        assert_eq!(url.host_str(), Some("project.supabase.co"));
    }

    #[test]
    fn rejects_empty_and_non_http_schemes() {
        assert!(validate_http_url("  ").is_err());
        assert!(validate_http_url("ftp://project.supabase.co").is_err());
        assert!(validate_http_url("not a url").is_err());
    }
}
