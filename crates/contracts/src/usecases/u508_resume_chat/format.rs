use serde::{Deserialize, Serialize};

/// Форматы резюме, которые принимает бэкенд
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    pub const ALL: [ResumeFormat; 2] = [ResumeFormat::Pdf, ResumeFormat::Docx];

    pub fn extension(self) -> &'static str {
        match self {
            ResumeFormat::Pdf => ".pdf",
            ResumeFormat::Docx => ".docx",
        }
    }

    /// Detects the format from a file name, case-insensitively.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| lower.ends_with(format.extension()))
    }

    /// Value for the `accept` attribute of the file picker, e.g. `".pdf,.docx"`.
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .map(|format| format.extension())
            .collect::<Vec<_>>()
            .join(",")
    }
}
