#[cfg(test)]
mod validation_tests {
    use hr_ops_server::client::{ClientError, FormState, SubmissionStatus, SubmitError};
    use hr_ops_server::models::{
        ApiResponse, InternshipApplication, OfferLetter, ReceivedApplication, ResumeFile,
    };
    use hr_ops_server::validation::{validate, validate_field, INVALID_EMAIL_MESSAGE};

    fn complete_application() -> InternshipApplication {
        InternshipApplication {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            university: "IIT Delhi".into(),
            major: "Computer Science".into(),
            graduation_year: "2026".into(),
            resume: Some(ResumeFile::new("cv.pdf", b"%PDF".to_vec())),
            cover_letter: "Hello".into(),
        }
    }

    #[test]
    fn test_empty_application_reports_every_field() {
        let errors = validate(&InternshipApplication::default());

        assert_eq!(errors.len(), 9);
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
        assert_eq!(errors.get("resume"), Some("Resume is required"));
        assert_eq!(errors.get("coverLetter"), Some("Cover letter is required"));
    }

    #[test]
    fn test_complete_application_is_valid() {
        assert!(validate(&complete_application()).is_empty());
    }

    #[test]
    fn test_malformed_email() {
        let mut application = complete_application();
        application.email = "not-an-email".into();

        let errors = validate(&application);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn test_whitespace_only_counts_as_filled() {
        let mut offer = OfferLetter::default();
        offer.terms = "   ".into();
        assert_eq!(validate_field(&offer, "terms"), None);

        offer.terms = String::new();
        assert_eq!(
            validate_field(&offer, "terms").as_deref(),
            Some("Terms are required")
        );
    }

    #[test]
    fn test_empty_offer_reports_every_field() {
        let errors = validate(&OfferLetter::default());
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                "candidateName",
                "department",
                "position",
                "reportingManager",
                "salary",
                "startDate",
                "terms",
            ]
        );
        assert_eq!(
            errors.get("reportingManager"),
            Some("Reporting manager is required")
        );
    }

    #[test]
    fn test_validate_field_unknown_has_no_error() {
        assert_eq!(validate_field(&OfferLetter::default(), "nickname"), None);
    }

    #[test]
    fn test_resume_picker_filters_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"png").unwrap();
        assert!(ResumeFile::from_path(&path).is_err());

        let path = dir.path().join("cv.DOCX");
        std::fs::write(&path, b"docx").unwrap();
        let resume = ResumeFile::from_path(&path).unwrap();
        assert_eq!(resume.file_name, "cv.DOCX");
        assert_eq!(resume.bytes, b"docx");
    }

    #[test]
    fn test_invalid_submit_marks_everything_touched() {
        let mut form = FormState::<InternshipApplication>::new();

        match form.begin_submit() {
            Err(SubmitError::Invalid(errors)) => assert_eq!(errors.len(), 9),
            other => panic!("expected validation errors, got {:?}", other.map(|_| ())),
        }
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert!(form.is_touched("graduationYear"));
        assert_eq!(form.visible_error("resume"), Some("Resume is required"));
    }

    #[test]
    fn test_set_resume_clears_touched_error() {
        let mut form = FormState::<InternshipApplication>::new();
        form.blur("resume");
        assert_eq!(form.visible_error("resume"), Some("Resume is required"));

        form.set_resume(Some(ResumeFile::new("cv.pdf", b"%PDF".to_vec())));
        assert_eq!(form.visible_error("resume"), None);
    }

    #[tokio::test]
    async fn test_invalid_form_never_sends() {
        let mut form = FormState::<OfferLetter>::new();
        let mut sent = false;

        let result = form
            .submit_with(|_values| {
                sent = true;
                async { Ok::<_, ClientError>(ApiResponse::<()>::success(())) }
            })
            .await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert!(!sent);
    }

    #[tokio::test]
    async fn test_server_failure_without_message_uses_form_default() {
        let mut form = FormState::<InternshipApplication>::with_initial(complete_application());

        form.submit_with(|_values| async {
            Ok::<_, ClientError>(ApiResponse::<ReceivedApplication> {
                success: false,
                data: None,
                error: None,
            })
        })
        .await
        .unwrap();

        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed("Failed to submit application".to_string())
        );
        assert_eq!(form.values(), &complete_application());
    }

    #[tokio::test]
    async fn test_success_resets_to_initial_values() {
        let mut form = FormState::<InternshipApplication>::new();
        let filled = complete_application();
        for (field, value) in filled.text_fields() {
            assert!(form.set_text(field, value));
        }
        form.set_resume(filled.resume.clone());

        form.submit_with(|values| async move {
            assert_eq!(values.first_name, "Jane");
            Ok::<_, ClientError>(ApiResponse::success(ReceivedApplication::default()))
        })
        .await
        .unwrap();

        assert_eq!(form.status(), &SubmissionStatus::Succeeded);
        assert_eq!(form.values(), &InternshipApplication::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_touched("firstName"));
    }
}
