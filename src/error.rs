/// 계산 함수에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// 입력값이 허용 범위를 벗어난 경우
    InvalidInput(&'static str),
    /// 분모가 0이 되는 등 결과를 정의할 수 없는 입력
    DegenerateInput(&'static str),
}

impl CalcError {
    /// 오류 메시지 본문만 반환한다.
    pub fn message(&self) -> &'static str {
        match self {
            CalcError::InvalidInput(msg) | CalcError::DegenerateInput(msg) => msg,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InvalidInput(msg) => write!(f, "{msg}"),
            CalcError::DegenerateInput(msg) => write!(f, "degenerate input: {msg}"),
        }
    }
}

impl std::error::Error for CalcError {}
