#[cfg(test)]
mod offer_letter_tests {
    use std::path::Path;

    use hr_ops_server::document::offer_letter::{
        BATCH_DATES, CANDIDATE_COLLEGE, JOB_TITLE, PAGE_MARGINS, POINTS_TO_REMEMBER,
        STIPEND_AMOUNT,
    };
    use hr_ops_server::document::types::{Alignment, ColumnWidth, Node, PageSize, Rgb, Spacing};
    use hr_ops_server::document::{build_offer_letter, LetterAssets};
    use hr_ops_server::models::OfferLetter;

    fn assets() -> LetterAssets {
        LetterAssets::from_dir("static")
    }

    fn offer(name: &str) -> OfferLetter {
        OfferLetter {
            candidate_name: name.to_string(),
            position: "Backend Engineer".to_string(),
            start_date: "2025-05-10".to_string(),
            salary: "15000".to_string(),
            department: "Engineering".to_string(),
            reporting_manager: "Vijay".to_string(),
            terms: "Standard".to_string(),
        }
    }

    #[test]
    fn test_reading_order() {
        let doc = build_offer_letter(&offer("Jane Doe"), &assets());
        let texts = doc.texts();

        let expected_prefix = [
            "Jane Doe".to_string(),
            format!("{} Intern", JOB_TITLE),
            format!("College: {}", CANDIDATE_COLLEGE),
            "\nDear Intern,".to_string(),
        ];
        for (actual, expected) in texts.iter().zip(expected_prefix.iter()) {
            assert_eq!(*actual, expected.as_str());
        }

        let tail = texts[texts.len() - 4..].to_vec();
        assert_eq!(
            tail,
            vec![
                "Looking forward to working with you!",
                "With Best Wishes,",
                "Mr. Vijay Kumar",
                "Founder, Micro IT",
            ]
        );
    }

    #[test]
    fn test_fixed_literals_ignore_request() {
        let doc = build_offer_letter(&offer("Jane Doe"), &assets());
        let body = doc.texts().join("\n");

        assert!(body.contains(STIPEND_AMOUNT));
        assert!(body.contains(BATCH_DATES));
        assert!(!body.contains("Backend Engineer"));
        assert!(!body.contains("2025-05-10"));
        for point in POINTS_TO_REMEMBER {
            assert!(body.contains(point));
        }
    }

    #[test]
    fn test_blank_name_prints_placeholder() {
        let doc = build_offer_letter(&offer("   "), &assets());
        assert_eq!(doc.texts()[0], "[Candidate Name]");
        assert_eq!(doc.title.as_deref(), Some("Offer Letter - [Candidate Name]"));
    }

    #[test]
    fn test_page_setup() {
        let doc = build_offer_letter(&offer("Jane Doe"), &assets());
        assert_eq!(doc.page_size, PageSize::Letter);
        assert_eq!(doc.page_margins, PAGE_MARGINS);
        assert_eq!(doc.page_margins, Spacing::new(40.0, 40.0, 40.0, 60.0));
    }

    #[test]
    fn test_header_layout() {
        let doc = build_offer_letter(&offer("Jane Doe"), &assets());

        let Node::Columns { columns, margin, .. } = &doc.content[0] else {
            panic!("header must be a column row");
        };
        assert_eq!(*margin, Spacing::bottom(30.0));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].width, ColumnWidth::Star);
        assert_eq!(columns[1].width, ColumnWidth::Fixed(100.0));

        let Node::Image(badge) = &columns[1].node else {
            panic!("right column must be the badge image");
        };
        assert_eq!(badge.path, Path::new("static").join("microit-type-logo.png"));
        assert_eq!(badge.alignment, Alignment::Right);

        let mut images = Vec::new();
        columns[0].node.collect_images(&mut images);
        let widths: Vec<f32> = images.iter().map(|image| image.width).collect();
        assert_eq!(widths, vec![100.0, 300.0]);
    }

    #[test]
    fn test_footer_spans_page_on_every_page() {
        let doc = build_offer_letter(&offer("Jane Doe"), &assets());

        for page in 1..=3 {
            let Some(Node::Image(footer)) = doc.footer_for(page) else {
                panic!("footer must be an image");
            };
            assert_eq!(footer.path, Path::new("static").join("microit-footer.png"));
            assert_eq!(footer.width, PageSize::Letter.width());
            assert_eq!(footer.alignment, Alignment::Center);
        }
    }

    #[test]
    fn test_styles() {
        let doc = build_offer_letter(&offer("Jane Doe"), &assets());

        let title = doc.style("offerTitle").unwrap();
        assert_eq!(title.font_size, Some(16.0));
        assert!(title.bold && title.underline);
        assert_eq!(title.color, Some(Rgb(0x1a, 0x2b, 0x4d)));

        let name = doc.style("candidateName").unwrap();
        assert_eq!(name.font_size, Some(14.0));
        assert_eq!(name.margin, Some(Spacing::bottom(5.0)));

        assert_eq!(doc.style("companyName").unwrap().font_size, Some(18.0));
        assert_eq!(
            doc.style("subheader").unwrap().margin,
            Some(Spacing::vertical(10.0, 5.0))
        );
        assert!(doc.style("missing").is_none());
    }
}
