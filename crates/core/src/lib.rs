//! Facial emotion analysis with escalation of negative emotions and
//! generated explanations.
//!
//! Each bounded context keeps its types and traits under `domain` and its
//! ONNX/HTTP/IO adapters under `infrastructure`; `pipeline` wires them into
//! the upload analysis use case.

pub mod shared {
    pub mod constants;
    pub mod face_region;
    pub mod frame;
    pub mod model_resolver;
}

pub mod detection {
    pub mod domain {
        pub mod face_detector;
    }
    pub mod infrastructure;
}

pub mod emotion {
    pub mod domain {
        pub mod emotion_classifier;
        pub mod emotion_recognizer;
        pub mod emotion_scores;
        pub mod face_analysis;
        pub mod negative_emotion_policy;
    }
    pub mod infrastructure;
}

pub mod explanation {
    pub mod domain {
        pub mod explainer;
        pub mod prompt;
    }
    pub mod infrastructure;
}

pub mod reporting {
    pub mod domain {
        pub mod notifier;
        pub mod report_sink;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod analyze_upload_use_case;
    pub mod report_renderer;
    pub mod upload_store;
}
