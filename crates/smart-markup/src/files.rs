//! Clipboard commands that copy facts about the active file.

use crate::clipboard::Clipboard;
use crate::engine::Outcome;
use crate::error::EngineError;

/// The file shown in the active editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFile {
    /// Path relative to the vault root, `/`-separated.
    pub path: String,
    /// Absolute path of the vault root.
    pub base_path: String,
}

impl ActiveFile {
    /// Create an active file description.
    pub fn new(path: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            base_path: base_path.into(),
        }
    }

    /// File name with extension.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// File name without its last extension.
    pub fn basename(&self) -> &str {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }

    /// Last extension, empty if there is none.
    pub fn extension(&self) -> &str {
        let name = self.name();
        match name.rsplit_once('.') {
            Some((stem, extension)) if !stem.is_empty() => extension,
            _ => "",
        }
    }

    /// Vault root joined with the relative path.
    pub fn absolute_path(&self) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), self.path)
    }

    /// Folder containing the file, `/` for files at the vault root.
    pub fn parent_folder(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((parent, _)) => parent,
            None => "/",
        }
    }
}

/// Copy the relative path, or advance the cycle relative → absolute → parent folder →
/// relative when the clipboard already holds one of them.
pub async fn copy_path<C: Clipboard>(
    file: &ActiveFile,
    clipboard: &C,
) -> Result<Outcome, EngineError> {
    let current = clipboard.read_text().await?;
    let absolute = file.absolute_path();

    let notice = if current == file.path {
        clipboard.write_text(&absolute).await?;
        format!("Absolute path copied: \n{absolute}")
    } else if current == absolute {
        let parent = file.parent_folder();
        clipboard.write_text(parent).await?;
        format!("Parent Folder copied: \n{parent}")
    } else {
        clipboard.write_text(&file.path).await?;
        format!("Relative path copied: \n{}", file.path)
    };

    log::info!("{notice}");
    Ok(Outcome::Notice(notice))
}

/// Copy the file name without extension, or with it when the clipboard already holds the bare
/// name.
pub async fn copy_file_name<C: Clipboard>(
    file: &ActiveFile,
    clipboard: &C,
) -> Result<Outcome, EngineError> {
    let current = clipboard.read_text().await?;
    let mut name = file.basename().to_string();
    if current == name {
        name = format!("{name}.{}", file.extension());
    }
    clipboard.write_text(&name).await?;

    let notice = format!("File Name copied: \n{name}");
    log::info!("{notice}");
    Ok(Outcome::Notice(notice))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_parts() {
        let file = ActiveFile::new("notes/daily/2024-01-01.md", "/home/me/vault");
        assert_eq!(file.name(), "2024-01-01.md");
        assert_eq!(file.basename(), "2024-01-01");
        assert_eq!(file.extension(), "md");
        assert_eq!(file.absolute_path(), "/home/me/vault/notes/daily/2024-01-01.md");
        assert_eq!(file.parent_folder(), "notes/daily");
    }

    #[test]
    fn test_root_file_and_dotfile() {
        let file = ActiveFile::new("Inbox.md", "/vault/");
        assert_eq!(file.parent_folder(), "/");
        assert_eq!(file.absolute_path(), "/vault/Inbox.md");

        let dotfile = ActiveFile::new(".hidden", "/vault");
        assert_eq!(dotfile.basename(), ".hidden");
        assert_eq!(dotfile.extension(), "");
    }
}
