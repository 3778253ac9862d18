use crate::MissionError;

pub type MissionResult<T> = Result<T, MissionError>;
