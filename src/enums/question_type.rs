use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    YesNoComment,
    #[serde(rename = "rating_1_5")]
    Rating1To5,
    YesNoList,
    FreeText,
}
