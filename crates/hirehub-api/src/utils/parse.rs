//! 느슨한 입력 파싱 유틸리티.
//!
//! 프론트엔드는 리스트를 쉼표 구분 문자열 또는 JSON 인코딩 문자열로,
//! 숫자를 문자열 또는 JSON 숫자로 보냅니다. 이 모듈이 그 관용을
//! 한 곳에서 흡수합니다.

use rust_decimal::Decimal;
use serde::Deserialize;

/// 요구 사항 입력을 리스트로 물질화.
///
/// 단일 문자열로 들어와도 항상 리스트가 됩니다.
/// `"node,express,mongo"` → `["node", "express", "mongo"]`
pub fn split_requirements(input: &str) -> Vec<String> {
    input.split(',').map(str::to_string).collect()
}

/// 스킬 입력 파싱.
///
/// JSON 인코딩된 리스트 문자열을 우선 시도하고, 파싱에 실패하면
/// 쉼표 구분으로 폴백합니다. 요소는 각각 트리밍됩니다.
/// 잘못된 JSON 유사 입력도 요청을 실패시키지 않습니다.
pub fn parse_skills(input: &str) -> Vec<String> {
    if let Ok(list) = serde_json::from_str::<Vec<String>>(input) {
        return list.into_iter().map(|s| s.trim().to_string()).collect();
    }

    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// JSON 숫자 또는 문자열로 들어오는 수치 입력.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// Decimal로 강제 변환.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            NumberOrText::Number(n) => Decimal::try_from(*n).ok(),
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }

    /// i32로 강제 변환. 소수부가 있으면 실패합니다.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            NumberOrText::Number(n) => {
                if n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64 {
                    Some(*n as i32)
                } else {
                    None
                }
            }
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }

    /// 빈 문자열 입력인지 확인 (누락 필드 취급).
    pub fn is_empty_text(&self) -> bool {
        matches!(self, NumberOrText::Text(s) if s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_split_requirements() {
        assert_eq!(
            split_requirements("node,express,mongo"),
            vec!["node", "express", "mongo"]
        );
    }

    #[test]
    fn test_split_requirements_single_value() {
        assert_eq!(split_requirements("rust"), vec!["rust"]);
    }

    #[test]
    fn test_parse_skills_comma_separated_trims() {
        assert_eq!(parse_skills("go, rust"), vec!["go", "rust"]);
    }

    #[test]
    fn test_parse_skills_json_list() {
        assert_eq!(
            parse_skills(r#"["go", " rust "]"#),
            vec!["go", "rust"]
        );
    }

    #[test]
    fn test_parse_skills_malformed_json_falls_back() {
        // 잘못된 JSON 유사 입력 - 요청 실패 대신 쉼표 분할
        assert_eq!(
            parse_skills(r#"["go", "rust"#),
            vec![r#"["go""#, r#""rust"#]
        );
    }

    #[test]
    fn test_number_or_text_decimal() {
        let from_number: NumberOrText = serde_json::from_str("45000.5").unwrap();
        assert_eq!(from_number.as_decimal(), Some(dec("45000.5")));

        let from_text: NumberOrText = serde_json::from_str("\"45000\"").unwrap();
        assert_eq!(from_text.as_decimal(), Some(dec("45000")));

        let garbage = NumberOrText::Text("abc".to_string());
        assert_eq!(garbage.as_decimal(), None);
    }

    #[test]
    fn test_number_or_text_i32() {
        assert_eq!(NumberOrText::Number(3.0).as_i32(), Some(3));
        assert_eq!(NumberOrText::Number(3.5).as_i32(), None);
        assert_eq!(NumberOrText::Text("7".to_string()).as_i32(), Some(7));
        assert_eq!(NumberOrText::Text("seven".to_string()).as_i32(), None);
    }

    #[test]
    fn test_empty_text_detection() {
        assert!(NumberOrText::Text("  ".to_string()).is_empty_text());
        assert!(!NumberOrText::Text("1".to_string()).is_empty_text());
        assert!(!NumberOrText::Number(0.0).is_empty_text());
    }
}
