//! Content tree of the internship offer letter.
//!
//! The letter layout is fixed. Only the candidate name comes from the request;
//! the college, batch dates, stipend and job title below are literal text the
//! form does not collect yet.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::types::{
    Alignment, Column, ColumnWidth, DocumentDefinition, Node, PageSize, Rgb, Spacing, StyleSheet,
    TextStyle,
};
use crate::models::OfferLetter;

/// Not collected by the form yet.
pub const CANDIDATE_COLLEGE: &str = "[Candidate College]";
/// Not collected by the form yet.
pub const BATCH_DATES: &str = "10 May to 10 June 2025";
/// Not collected by the form yet.
pub const STIPEND_AMOUNT: &str = "₹15000";
pub const JOB_TITLE: &str = "Software Developer";

pub const PAGE_MARGINS: Spacing = Spacing::new(40.0, 40.0, 40.0, 60.0);

pub const POINTS_TO_REMEMBER: [&str; 3] = [
    "You have to develop any two projects from the given projects list in your own interested programming languages.",
    "You can also submit your projects before 15 June.",
    "You can join the Micro IT by post internship opportunities after completion of this internship.",
];

/// Placeholder printed in place of a field the request left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefault {
    pub field: &'static str,
    pub placeholder: &'static str,
}

impl FieldDefault {
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if value.trim().is_empty() {
            Cow::Borrowed(self.placeholder)
        } else {
            Cow::Borrowed(value)
        }
    }
}

pub const CANDIDATE_NAME_DEFAULT: FieldDefault = FieldDefault {
    field: "candidateName",
    placeholder: "[Candidate Name]",
};

pub const POSITION_DEFAULT: FieldDefault = FieldDefault {
    field: "position",
    placeholder: "[Position]",
};

/// Request fields after placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOfferFields<'a> {
    pub candidate_name: Cow<'a, str>,
    /// Resolved for completeness; the letter body prints [`JOB_TITLE`] instead.
    pub position: Cow<'a, str>,
}

impl<'a> ResolvedOfferFields<'a> {
    pub fn resolve(offer: &'a OfferLetter) -> Self {
        Self {
            candidate_name: CANDIDATE_NAME_DEFAULT.apply(&offer.candidate_name),
            position: POSITION_DEFAULT.apply(&offer.position),
        }
    }
}

/// Image files the letter references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterAssets {
    pub logo: PathBuf,
    pub text_logo: PathBuf,
    pub badge: PathBuf,
    pub footer: PathBuf,
}

impl LetterAssets {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            logo: dir.join("microit-logo.png"),
            text_logo: dir.join("microit-text-logo.png"),
            badge: dir.join("microit-type-logo.png"),
            footer: dir.join("microit-footer.png"),
        }
    }
}

pub fn letter_styles() -> StyleSheet {
    let mut styles = StyleSheet::new();
    styles.insert("companyName".into(), TextStyle::sized(18.0).bold());
    styles.insert(
        "offerTitle".into(),
        TextStyle::sized(16.0)
            .bold()
            .underline()
            .with_color(Rgb(0x1a, 0x2b, 0x4d)),
    );
    styles.insert(
        "candidateName".into(),
        TextStyle::sized(14.0).bold().with_margin(Spacing::bottom(5.0)),
    );
    styles.insert(
        "candidateDetails".into(),
        TextStyle::sized(12.0).with_margin(Spacing::bottom(3.0)),
    );
    styles.insert(
        "subheader".into(),
        TextStyle::sized(12.0)
            .bold()
            .with_margin(Spacing::vertical(10.0, 5.0)),
    );
    styles.insert(
        "body".into(),
        TextStyle::sized(12.0).with_margin(Spacing::bottom(5.0)),
    );
    styles
}

fn header(assets: &LetterAssets) -> Node {
    let logos = Node::Columns {
        columns: vec![
            Column {
                width: ColumnWidth::Fixed(100.0),
                node: Node::image(&assets.logo, 100.0, Alignment::Left),
            },
            Column {
                width: ColumnWidth::Fixed(300.0),
                node: Node::image(&assets.text_logo, 300.0, Alignment::Left),
            },
        ],
        gap: 20.0,
        margin: Spacing::bottom(5.0),
    };

    Node::Columns {
        columns: vec![
            Column {
                width: ColumnWidth::Star,
                node: Node::Stack {
                    children: vec![logos],
                    margin: Spacing::ZERO,
                },
            },
            Column {
                width: ColumnWidth::Fixed(100.0),
                node: Node::image(&assets.badge, 100.0, Alignment::Right),
            },
        ],
        gap: 0.0,
        margin: Spacing::bottom(30.0),
    }
}

fn offer_paragraph() -> String {
    format!(
        "We are pleased to offer you a 1-month internship at MICRO IT as a {title} in Full-Stack Development. \
         This internship is unpaid, but based on excellence, a post-internship opportunity with Stipend up to {stipend} \
         can be given by Micro IT. Your internship batch starts on {batch} and you complete your projects as soon as \
         you complete and before 15 June 2025.",
        title = JOB_TITLE,
        stipend = STIPEND_AMOUNT,
        batch = BATCH_DATES,
    )
}

/// Build the offer letter for one request.
pub fn build_offer_letter(offer: &OfferLetter, assets: &LetterAssets) -> DocumentDefinition {
    let fields = ResolvedOfferFields::resolve(offer);
    let page_size = PageSize::Letter;

    let content = vec![
        header(assets),
        Node::text(fields.candidate_name.as_ref(), "candidateName"),
        Node::text(format!("{} Intern", JOB_TITLE), "candidateDetails"),
        Node::text(format!("College: {}", CANDIDATE_COLLEGE), "candidateDetails"),
        Node::text_with_margin("\nDear Intern,", "body", Spacing::vertical(20.0, 10.0)),
        Node::text_with_margin(offer_paragraph(), "body", Spacing::bottom(15.0)),
        Node::text_with_margin("Points to remember", "subheader", Spacing::vertical(10.0, 5.0)),
        Node::List {
            items: POINTS_TO_REMEMBER.iter().map(|s| s.to_string()).collect(),
            style: Some("body".to_string()),
            margin: Spacing::bottom(20.0),
        },
        Node::text_with_margin(
            "Looking forward to working with you!",
            "body",
            Spacing::vertical(10.0, 20.0),
        ),
        Node::text("With Best Wishes,", "body"),
        Node::text("Mr. Vijay Kumar", "body"),
        Node::text("Founder, Micro IT", "body"),
    ];

    let footer_path = assets.footer.clone();
    let footer_width = page_size.width();

    DocumentDefinition {
        title: Some(format!("Offer Letter - {}", fields.candidate_name)),
        page_size,
        page_margins: PAGE_MARGINS,
        content,
        styles: letter_styles(),
        // Same image on every page, spanning the full page width.
        footer: Some(Arc::new(move |_page| {
            Node::image(footer_path.clone(), footer_width, Alignment::Center)
        })),
    }
}
