#[cfg(test)]
mod pipeline_test {
    use crate::classifier::error::{ClassifierError, EngineError};
    use crate::classifier::pipeline::{PipelineStatus, UNINITIALIZED_TEXT};
    use crate::classifier::pixel_tensor_encoder::PixelBuffer;
    use crate::classifier::tests::fixture::Fixture;
    use crate::inference_engine::impl_fake::InferenceEngineFake;
    use crate::library::logger::interface::Level;

    #[test]
    fn test_new_pipeline_is_uninitialized() {
        let f = Fixture::uninitialized(3);

        assert_eq!(f.pipeline.status(), PipelineStatus::Uninitialized);
    }

    #[test]
    fn test_classify_before_bind_is_not_ready() {
        let mut f = Fixture::uninitialized(3);
        let frame = f.frame();

        let result = f.pipeline.classify(&frame);

        assert!(matches!(result, Err(ClassifierError::NotReady)));
        assert_eq!(f.logger.count(Level::Error), 1);
    }

    #[test]
    fn test_bind_moves_to_ready() {
        let f = Fixture::ready(vec![0.2, 0.8]);

        assert_eq!(f.pipeline.status(), PipelineStatus::Ready);
    }

    #[test]
    fn test_bind_rejects_label_count_mismatch() {
        let mut f = Fixture::uninitialized(3);

        let result = f
            .pipeline
            .bind(Box::new(InferenceEngineFake::constant(vec![0.5, 0.5])));

        assert!(matches!(
            result,
            Err(ClassifierError::LabelCountMismatch {
                labels: 3,
                outputs: 2
            })
        ));
        assert_eq!(f.pipeline.status(), PipelineStatus::Uninitialized);
    }

    #[test]
    fn test_bind_twice_is_invalid_transition() {
        let mut f = Fixture::ready(vec![0.5, 0.5]);

        let result = f
            .pipeline
            .bind(Box::new(InferenceEngineFake::constant(vec![0.5, 0.5])));

        assert!(matches!(
            result,
            Err(ClassifierError::InvalidTransition(PipelineStatus::Ready))
        ));
    }

    #[test]
    fn test_classify_ranks_smoothed_scores() {
        let mut f = Fixture::ready(vec![0.1, 0.9, 0.3, 0.95, 0.2]);
        let frame = f.frame();

        let result = f.pipeline.classify(&frame).unwrap();

        let labels: Vec<&str> = result.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["label3", "label1", "label2"]);
        // First frame from rest: three stages at 0.4 scale the raw score by 0.064.
        assert!((result.entries[0].score - 0.95 * 0.064).abs() < 1e-6);
    }

    #[test]
    fn test_scores_rise_over_frames() {
        let mut f = Fixture::ready(vec![0.0, 1.0]);
        let frame = f.frame();

        let first = f.pipeline.classify(&frame).unwrap();
        let second = f.pipeline.classify(&frame).unwrap();

        assert!(second.entries[0].score > first.entries[0].score);
        assert!(second.entries[0].score < 1.0);
    }

    #[test]
    fn test_classify_on_closed_pipeline_is_not_ready() {
        let mut f = Fixture::ready(vec![0.5, 0.5]);
        let frame = f.frame();

        f.pipeline.close();
        let result = f.pipeline.classify(&frame);

        assert!(matches!(result, Err(ClassifierError::NotReady)));
        assert_eq!(f.pipeline.status(), PipelineStatus::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut f = Fixture::ready(vec![0.5, 0.5]);

        f.pipeline.close();
        f.pipeline.close();

        assert_eq!(f.pipeline.status(), PipelineStatus::Closed);
        let released = f
            .logger
            .entries()
            .iter()
            .filter(|(_, message)| message.contains("Inference engine released"))
            .count();
        assert_eq!(released, 1);
    }

    #[test]
    fn test_close_from_uninitialized() {
        let mut f = Fixture::uninitialized(2);

        f.pipeline.close();

        assert_eq!(f.pipeline.status(), PipelineStatus::Closed);
        assert!(matches!(
            f.pipeline
                .bind(Box::new(InferenceEngineFake::constant(vec![0.5, 0.5]))),
            Err(ClassifierError::InvalidTransition(PipelineStatus::Closed))
        ));
    }

    #[test]
    fn test_wrong_frame_size_is_invalid_input() {
        let mut f = Fixture::ready(vec![0.5, 0.5]);
        let frame = PixelBuffer::filled(3, 3, 0);

        let result = f.pipeline.classify(&frame);

        assert!(matches!(result, Err(ClassifierError::InvalidInput { .. })));
        assert_eq!(f.pipeline.status(), PipelineStatus::Ready);
    }

    #[test]
    fn test_engine_failure_is_propagated() {
        let mut f = Fixture::uninitialized(2);
        f.pipeline
            .bind(Box::new(InferenceEngineFake::failing(2, "out of memory")))
            .unwrap();
        let frame = f.frame();

        let result = f.pipeline.classify(&frame);

        match result {
            Err(ClassifierError::EngineFailure(EngineError::Run(message))) => {
                assert_eq!(message, "out of memory")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_classify_text_formats_ranking() {
        let mut f = Fixture::ready(vec![0.0, 1.0]);
        let frame = f.frame();

        let text = f.pipeline.classify_text(&frame).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with("ms"));
        assert_eq!(lines[1], "label1: 0.06");
        assert_eq!(lines[2], "label0: 0.00");
    }

    #[test]
    fn test_classify_text_when_not_ready() {
        let mut f = Fixture::uninitialized(2);
        let frame = f.frame();

        let text = f.pipeline.classify_text(&frame).unwrap();

        assert_eq!(text, UNINITIALIZED_TEXT);
    }

    #[test]
    fn test_classify_text_propagates_other_errors() {
        let mut f = Fixture::ready(vec![0.5, 0.5]);

        let result = f.pipeline.classify_text(&PixelBuffer::filled(1, 1, 0));

        assert!(matches!(result, Err(ClassifierError::InvalidInput { .. })));
    }
}
