use services::{DatasetError, QuizError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidRoundCount,
    EmptyCategory,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidRoundCount => "Pick between 1 and 20 tests.",
            ViewError::EmptyCategory => {
                "No images found for one of the categories. Check the dataset and try again."
            }
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&QuizError> for ViewError {
    fn from(err: &QuizError) -> Self {
        match err {
            QuizError::RoundCount(_) => ViewError::InvalidRoundCount,
            QuizError::Dataset(DatasetError::EmptyCategory(_) | DatasetError::NoCategories) => {
                ViewError::EmptyCategory
            }
            _ => ViewError::Unknown,
        }
    }
}
