use std::path::Path;

pub fn validate_file_exists(path: &str) -> Result<String, String> {
    let candidate = Path::new(path);
    if !candidate.exists() {
        Err(format!("Path does not exist: {path}"))
    } else if candidate.is_dir() {
        Err(format!("Path is a directory, expected a JSON file: {path}"))
    } else {
        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_exists() {
        assert!(validate_file_exists("Cargo.toml").is_ok());

        let missing = validate_file_exists("no_such_file.json").unwrap_err();
        assert!(missing.contains("Path does not exist"));

        let dir = validate_file_exists("src").unwrap_err();
        assert!(dir.contains("is a directory"));
    }
}
