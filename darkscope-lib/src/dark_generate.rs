use crate::error::ScopeError;
use crate::style::dark_css;
use crate::style::scope_class::ScopeClass;
use crate::style::scope_report::ScopeReport;

pub mod dark_theme {
    use super::*;
    use log::info;
    use std::fs;
    use std::path::Path;

    /// Read `input`, scope it under `scope_class` and write the result to `output`.
    ///
    /// `output` is overwritten; passing the same path as `input` rewrites the file in place.
    pub fn generate(
        input: &Path,
        output: &Path,
        scope_class: &ScopeClass,
    ) -> Result<ScopeReport, ScopeError> {
        let css_content = read(input)?;
        let (scoped, report) = dark_css::scope_with_report(&css_content, scope_class);
        write(output, &scoped)?;
        Ok(report)
    }

    /// Write scoped text to `output`, replacing whatever was there.
    pub fn write(output: &Path, scoped: &str) -> Result<(), ScopeError> {
        fs::write(output, scoped).map_err(|e| ScopeError::io(output, e))?;
        info!("wrote {}", output.display());
        Ok(())
    }

    /// Same as [`generate`] but hands back the scoped text instead of writing it.
    pub fn render(
        input: &Path,
        scope_class: &ScopeClass,
    ) -> Result<(String, ScopeReport), ScopeError> {
        let css_content = read(input)?;
        Ok(dark_css::scope_with_report(&css_content, scope_class))
    }

    fn read(input: &Path) -> Result<String, ScopeError> {
        let css_content = fs::read_to_string(input).map_err(|e| ScopeError::io(input, e))?;
        info!("read {} ({} bytes)", input.display(), css_content.len());
        Ok(css_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_input_is_an_io_error() {
        let missing = Path::new("/definitely/not/here/dark.css");
        let result = dark_theme::render(missing, &ScopeClass::default());
        match result {
            Err(ScopeError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn render_then_write_matches_generate() {
        let dir = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let input = dir.join(format!("darkscope_render_in_{}.css", nanos));
        let output = dir.join(format!("darkscope_render_out_{}.css", nanos));
        std::fs::write(&input, "body.loaded {\n}\n").unwrap();

        let (scoped, report) = dark_theme::render(&input, &ScopeClass::default()).unwrap();
        dark_theme::write(&output, &scoped).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            ".dark-theme.loaded {\n}\n"
        );
        assert_eq!(report.body_selectors, 1);
        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);
    }

    #[test]
    fn write_into_missing_directory_is_an_io_error() {
        let output = std::env::temp_dir()
            .join("darkscope_no_such_dir_for_write")
            .join("out.css");
        match dark_theme::write(&output, ".dark-theme {\n}") {
            Err(ScopeError::Io { path, .. }) => assert_eq!(path, output),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
