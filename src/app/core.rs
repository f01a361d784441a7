use crate::image_classifier::interface::{ClassifyError, RankedResult};

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    WaitingForImage,
    Classifying {
        image: UploadedImage,
    },
    Classified {
        image: UploadedImage,
        result: RankedResult,
    },
    ClassifyFailed {
        image: Option<UploadedImage>,
        message: String,
    },
}

#[derive(Debug)]
pub enum Event {
    ImageSelected(UploadedImage),
    ImageLoadFailed { name: String, message: String },
    ClassifyDone(Result<RankedResult, ClassifyError>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageSelected(image) => {
                format!("ImageSelected({}, {} bytes)", image.name, image.bytes.len())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Classify { bytes: Vec<u8> },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Classify { bytes } => format!("Classify({} bytes)", bytes.len()),
        }
    }
}

pub fn init() -> (State, Vec<Effect>) {
    (State::WaitingForImage, vec![])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        // A new image restarts classification from any state
        (_, Event::ImageSelected(image)) => {
            let effects = vec![Effect::Classify {
                bytes: image.bytes.clone(),
            }];
            (State::Classifying { image }, effects)
        }

        (_, Event::ImageLoadFailed { name, message }) => (
            State::ClassifyFailed {
                image: None,
                message: format!("could not read {}: {}", name, message),
            },
            vec![],
        ),

        (State::Classifying { image }, Event::ClassifyDone(Ok(result))) => {
            (State::Classified { image, result }, vec![])
        }

        (State::Classifying { image }, Event::ClassifyDone(Err(error))) => (
            State::ClassifyFailed {
                image: Some(image),
                message: error.to_string(),
            },
            vec![],
        ),

        // Stale completion: the user already moved on to something else
        (state, Event::ClassifyDone(_)) => (state, vec![]),
    }
}
