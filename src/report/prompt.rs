use crate::models::RepositoryRecord;

/// Text interpolated for a repository whose description is null
pub const MISSING_DESCRIPTION: &str = "None";

/// One `- {full_name}: {description}` line per repository, in input order.
///
/// A null description is written out literally; the instructions ask the model
/// to flag thin descriptions itself.
pub fn serialize_repositories(repos: &[RepositoryRecord]) -> String {
    repos
        .iter()
        .map(|r| {
            format!(
                "- {}: {}",
                r.full_name,
                r.description.as_deref().unwrap_or(MISSING_DESCRIPTION)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full prompt for a Korean technical trend report on `repos`
pub fn build_prompt(repos: &[RepositoryRecord], query: &str) -> String {
    let repo_text = serialize_repositories(repos);

    format!(
        r#"
당신은 산업 기술 분석 전문가이며, 전문적인 기술 보고서를 작성하는 역할입니다.

검색 주제: "{query}"

아래 GitHub 트렌드 레포들은 영어/일본어 등 여러 언어가 섞여있습니다.
이 설명들을 기반으로 **완전한 한국어 기술 분석 보고서**를 작성하세요.

반드시 지켜야 할 규칙:
- 결과물은 100% 자연스러운 한국어로만 작성
- 영어/일본어 등 외국어 문장은 모두 해석해서 한글로 변환
- 기술 용어(AI, ROS, Python 등)는 원문 유지
- 문체는 "기술 리포트" 문체 (격식 있고 논리적인 표현)
- 반드시 Markdown 구조 유지
- 전체 길이는 A4 1~1.5장 분량
- 레포 설명이 부족할 경우: "정보 부족"이라고 명시

보고서 형식 (반드시 이 틀을 따라 작성):

# 1. 서론
- 검색 주제의 산업적/기술적 배경 설명

# 2. 핵심 기술 트렌드 분석
- 현재 어떤 흐름이 나타나는지
- 트렌드별 의미

# 3. 주요 GitHub 레포 분석
각 레포마다 아래 형식으로 정리:
### ● {{repo 이름}}
- 주요 기능 요약
- 기술적 특징
- 산업 적용 가능성
- 의미 (왜 중요한가)

# 4. 기술 적용 분야 및 산업 전망
- 제조, 물류, 의료 등 기술 활용 가능성

# 5. 결론
- 종합 요약
- 향후 기술 발전 전망

아래는 분석해야 할 레포 목록입니다:

{repo_text}

위의 모든 조건을 충족하는 **전문 기술 분석 보고서**를 한국어로 작성하세요.
    "#
    )
}
