//! Default keyword detail presets.
//!
//! System-authored detail bullets for the most frequently requested
//! keywords. User-authored entries (details.toml) shadow these by keyword.

use super::model::KeywordDetail;

/// Returns the system-authored default detail entries.
pub fn get_default_details() -> Vec<KeywordDetail> {
    vec![
        KeywordDetail::new(
            "SQL을 활용한 데이터 추출 경험",
            vec![
                "대용량 테이블에서 분석용 데이터셋을 직접 추출해 본 경험을 설명할 수 있어야 합니다.".to_string(),
                "JOIN, GROUP BY, 윈도우 함수 등 집계 중심 쿼리 작성에 익숙해야 합니다.".to_string(),
                "서브쿼리와 CTE로 복잡한 추출 조건을 단계적으로 풀어내는 연습이 필요합니다.".to_string(),
                "쿼리 실행 계획을 읽고 느린 쿼리를 개선해 본 사례가 있으면 좋습니다.".to_string(),
                "추출 결과를 검증하는 습관(건수 대조, 중복/결측 확인)을 함께 언급하세요.".to_string(),
                "실제 업무 지표 정의에 맞춰 쿼리를 수정해 본 경험이 가장 설득력 있습니다.".to_string(),
            ],
        ),
        KeywordDetail::new(
            "Python 기반 데이터 분석",
            vec![
                "pandas로 전처리부터 집계까지 이어지는 분석 흐름을 보여줄 수 있어야 합니다.".to_string(),
                "시각화 라이브러리로 분석 결과를 전달해 본 경험을 정리해 두세요.".to_string(),
                "주피터 노트북을 재현 가능한 형태로 관리하는 습관이 평가에 반영됩니다.".to_string(),
            ],
        ),
        KeywordDetail::new(
            "통계 기반 실험 설계",
            vec![
                "A/B 테스트의 가설 수립과 표본 크기 산정 과정을 설명할 수 있어야 합니다.".to_string(),
                "유의수준과 검정력의 트레이드오프를 실무 언어로 풀어낼 수 있으면 좋습니다.".to_string(),
                "실험 결과를 의사결정으로 연결한 사례를 준비하세요.".to_string(),
            ],
        ),
        KeywordDetail::new(
            "대시보드 구축 경험",
            vec![
                "지표 정의부터 시각화까지 대시보드를 처음부터 만들어 본 경험이 중요합니다.".to_string(),
                "이해관계자의 질문을 지표로 번역한 과정을 이야기할 수 있어야 합니다.".to_string(),
            ],
        ),
        KeywordDetail::new(
            "머신러닝 모델링",
            vec![
                "문제 정의, 피처 설계, 평가 지표 선택의 근거를 설명할 수 있어야 합니다.".to_string(),
                "베이스라인 대비 개선 폭을 수치로 제시한 경험이 설득력 있습니다.".to_string(),
                "모델을 운영 환경에 배포하거나 배포에 협업해 본 경험이 있으면 좋습니다.".to_string(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_unique_keywords() {
        let details = get_default_details();
        let mut keywords: Vec<&str> = details.iter().map(|d| d.keyword.as_str()).collect();
        keywords.sort();
        keywords.dedup();
        assert_eq!(keywords.len(), details.len());
    }

    #[test]
    fn test_sql_extraction_preset_has_six_bullets() {
        let details = get_default_details();
        let sql = details
            .iter()
            .find(|d| d.keyword == "SQL을 활용한 데이터 추출 경험")
            .unwrap();
        assert_eq!(sql.bullets.len(), 6);
    }

    #[test]
    fn test_no_preset_has_empty_bullets() {
        assert!(
            get_default_details()
                .iter()
                .all(|d| !d.bullets.is_empty())
        );
    }
}
