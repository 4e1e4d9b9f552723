use proptest::prelude::*;
use std::collections::BTreeSet;
use veritas_idv::{
    CollectedData, DocumentFileData, DocumentType, FaceData, FieldType, TwoDecimalFloat,
    UploadMethod,
};

fn unit_score() -> impl Strategy<Value = TwoDecimalFloat> {
    (0i64..=100).prop_map(|h| TwoDecimalFloat::from_hundredths(h).unwrap())
}

fn score() -> impl Strategy<Value = Option<TwoDecimalFloat>> {
    proptest::option::of(unit_score())
}

fn document() -> impl Strategy<Value = DocumentFileData> {
    ("[a-z]{4,8}", score(), score()).prop_map(|(file, front, passport)| DocumentFileData {
        front_card_score: front,
        passport_score: passport,
        ..DocumentFileData::new(format!("file_{}", file), UploadMethod::AutoCapture)
    })
}

fn face() -> impl Strategy<Value = FaceData> {
    (
        "[a-z]{4,8}",
        unit_score(),
        unit_score(),
        1u32..32,
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(file, best, variance, frames, training)| FaceData {
            best_high_res_image: format!("{}_best_hi", file),
            best_low_res_image: format!("{}_best_lo", file),
            first_high_res_image: format!("{}_first_hi", file),
            first_low_res_image: format!("{}_first_lo", file),
            last_high_res_image: format!("{}_last_hi", file),
            last_low_res_image: format!("{}_last_lo", file),
            best_face_score: best,
            face_score_variance: variance,
            num_frames: frames,
            training_consent: training,
        })
}

fn document_type() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::DrivingLicense),
        Just(DocumentType::IdCard),
        Just(DocumentType::Passport),
    ]
}

fn field_type() -> impl Strategy<Value = FieldType> {
    (0usize..FieldType::ALL.len()).prop_map(|i| FieldType::ALL[i])
}

fn collected_data() -> impl Strategy<Value = CollectedData> {
    (
        proptest::option::of(any::<bool>()),
        proptest::option::of(face()),
        proptest::option::of(document()),
        proptest::option::of(document()),
        proptest::option::of(document_type()),
    )
        .prop_map(|(consent, face, back, front, doc_type)| {
            let mut data = CollectedData::default();
            if let Some(consent) = consent {
                data = data.with_biometric_consent(consent);
            }
            if let Some(face) = face {
                data = data.with_face(face);
            }
            if let Some(back) = back {
                data = data.with_id_document_back(back);
            }
            if let Some(front) = front {
                data = data.with_id_document_front(front);
            }
            if let Some(doc_type) = doc_type {
                data = data.with_id_document_type(doc_type);
            }
            data
        })
}

proptest! {
    #[test]
    fn merge_is_associative(a in collected_data(), b in collected_data(), c in collected_data()) {
        prop_assert_eq!(a.merging(&b).merging(&c), a.merging(&b.merging(&c)));
    }

    #[test]
    fn merge_is_idempotent(a in collected_data(), b in collected_data()) {
        let once = a.merging(&b);
        prop_assert_eq!(once.merging(&b), once.clone());
        prop_assert_eq!(a.merging(&a), a);
    }

    #[test]
    fn merged_types_are_union(a in collected_data(), b in collected_data()) {
        let merged = a.merging(&b).collected_types();
        let union: BTreeSet<FieldType> =
            a.collected_types().union(&b.collected_types()).copied().collect();
        prop_assert_eq!(merged, union);
    }

    #[test]
    fn cleared_field_leaves_collected_types(a in collected_data(), field in field_type()) {
        let mut expected = a.collected_types();
        expected.remove(&field);
        prop_assert_eq!(a.cleared(field).collected_types(), expected);
    }

    #[test]
    fn front_score_ignores_back(a in collected_data(), back in document()) {
        prop_assert_eq!(
            a.front_document_score(),
            a.clone().with_id_document_back(back).front_document_score()
        );
    }

    #[test]
    fn json_roundtrip(a in collected_data()) {
        let json = serde_json::to_string(&a).unwrap();
        let back: CollectedData = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn score_json_roundtrip_across_range(
        hundredths in -TwoDecimalFloat::MAX_HUNDREDTHS..=TwoDecimalFloat::MAX_HUNDREDTHS
    ) {
        let score = TwoDecimalFloat::from_hundredths(hundredths).unwrap();
        let json = serde_json::to_string(&score).unwrap();
        let back: TwoDecimalFloat = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, score);
        prop_assert_eq!(TwoDecimalFloat::new(score.value()).unwrap(), score);
    }

    #[test]
    fn score_json_roundtrip_near_max(offset in 0i64..1_000_000) {
        for hundredths in [
            TwoDecimalFloat::MAX_HUNDREDTHS - offset,
            offset - TwoDecimalFloat::MAX_HUNDREDTHS,
        ] {
            let score = TwoDecimalFloat::from_hundredths(hundredths).unwrap();
            let json = serde_json::to_string(&score).unwrap();
            let back: TwoDecimalFloat = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, score);
        }
    }

    #[test]
    fn score_out_of_range_is_rejected(
        excess in 1i64..=i64::MAX - TwoDecimalFloat::MAX_HUNDREDTHS
    ) {
        let hundredths = TwoDecimalFloat::MAX_HUNDREDTHS + excess;
        prop_assert!(TwoDecimalFloat::from_hundredths(hundredths).is_err());
        prop_assert!(TwoDecimalFloat::from_hundredths(-hundredths).is_err());
    }

    #[test]
    fn score_rounding_is_stable(value in -1000.0f64..1000.0) {
        let score = TwoDecimalFloat::new(value).unwrap();
        prop_assert_eq!(TwoDecimalFloat::new(score.value()).unwrap(), score);
        prop_assert!((score.value() - value).abs() <= 0.005 + 1e-9);
    }
}
