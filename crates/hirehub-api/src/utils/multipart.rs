//! Multipart 폼 수집기.
//!
//! 텍스트 필드와 단일 파일(필드명 `file`)을 받는 폼을 한 번에
//! 수집합니다. 파일은 메모리에 적재 후 오브젝트 스토어로 전달됩니다.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::ApiError;

/// 업로드된 파일.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub bytes: Bytes,
    pub filename: Option<String>,
}

/// 수집된 폼 데이터.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl FormData {
    /// multipart 스트림을 끝까지 소비하여 수집.
    pub async fn collect(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = FormData::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::missing(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "file" {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::missing(e.to_string()))?;
                form.file = Some(UploadedFile { bytes, filename });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::missing(e.to_string()))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// 텍스트 필드 조회. 빈 문자열은 미제공으로 취급합니다.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// 텍스트 필드를 소유 문자열로 조회.
    pub fn text_owned(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(fields: &[(&str, &str)]) -> FormData {
        FormData {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            file: None,
        }
    }

    #[test]
    fn test_empty_text_field_counts_as_absent() {
        let form = form_with(&[("fullname", ""), ("email", "a@b.com")]);
        assert_eq!(form.text("fullname"), None);
        assert_eq!(form.text("email"), Some("a@b.com"));
    }

    #[test]
    fn test_missing_field_is_none() {
        let form = form_with(&[]);
        assert_eq!(form.text("bio"), None);
    }
}
