//! End-to-end trajectories between the shipped presets

use tuning_trajectory::{
    build_interpolated, editor, mix_from_percent, CurveKind, Preset, TrajectoryBuilder, Tuning,
    TuningError,
};

mod common;
use common::{assert_all_close, assert_close};

#[test]
fn test_twelve_tet_to_pythagorean_linear_midpoint() {
    let source = Tuning::from_preset(Preset::TwelveTet).unwrap();
    let dest = Tuning::from_preset(Preset::Pythagorean).unwrap();

    let morph = build_interpolated(source.ratios(), dest.ratios(), 0.5, CurveKind::Linear).unwrap();
    println!("{}", editor::format_table(&morph));

    let expected = (2.0_f64.powf(1.0 / 12.0) + 256.0 / 243.0) / 2.0;
    assert_close(morph.ratios()[1], expected, "degree 1");
    assert!((morph.ratios()[1] - 1.05648).abs() < 1e-5);

    // 12-TET fifth sits just under 3/2
    let fifth = (2.0_f64.powf(7.0 / 12.0) + 1.5) / 2.0;
    assert_close(morph.ratios()[7], fifth, "degree 7");
    assert_eq!(morph.ratios()[0], 1.0);
}

#[test]
fn test_shared_fifth_is_exact() {
    // 3/2 in both systems
    for curve in CurveKind::ALL {
        let morph = build_interpolated(
            &Preset::Pythagorean.ratios(),
            &Preset::Ptolemy.ratios(),
            0.5,
            curve,
        )
        .unwrap();
        assert_eq!(morph.ratios()[7], 1.5, "{} curve", curve);
    }
}

#[test]
fn test_endpoints_reproduce_tunings() {
    for curve in CurveKind::ALL {
        for source in Preset::ALL {
            for dest in Preset::ALL {
                let builder = TrajectoryBuilder::new(&source.ratios(), &dest.ratios())
                    .unwrap()
                    .curve(curve);
                let start = builder.at(0.0).unwrap();
                let end = builder.at(1.0).unwrap();
                let what = format!("{} -> {} ({})", source, dest, curve);
                assert_all_close(start.ratios(), &source.ratios(), &what);
                assert_all_close(end.ratios(), &dest.ratios(), &what);
            }
        }
    }
}

#[test]
fn test_degree_count_mismatch() {
    let source = Preset::TwelveTet.ratios();
    let dest = &Preset::Erhu.ratios()[..11];
    let err = build_interpolated(&source, dest, 0.5, CurveKind::HalfCosine).unwrap_err();
    assert_eq!(
        err,
        TuningError::DegreeCountMismatch {
            source_len: 12,
            dest_len: 11
        }
    );
}

#[test]
fn test_edited_fields_feed_trajectory() {
    let source = Tuning::from_preset(Preset::Erhu).unwrap();

    // editor round trip: render fields, user edits one, commit back
    let mut fields: Vec<String> = source.ratios().iter().map(|r| editor::format_ratio(*r)).collect();
    fields[11] = "2".to_string();
    let mut dest = Tuning::new();
    dest.set_ratios(editor::parse_ratio_fields(&fields).unwrap());

    let morph = build_interpolated(source.ratios(), dest.ratios(), mix_from_percent(50), CurveKind::Exponential)
        .unwrap();
    assert_close(morph.ratios()[11], (1.85_f64 * 2.0).sqrt(), "geometric mean");
    assert_close(morph.ratios()[2], 1.17, "unchanged degree");
}

#[test]
fn test_bad_field_never_reaches_core() {
    let mut tuning = Tuning::from_preset(Preset::Ptolemy).unwrap();
    let before = tuning.clone();

    let fields = ["1", "1.0667", "nine/eight"];
    match editor::parse_ratio_fields(&fields) {
        Ok(ratios) => tuning.set_ratios(ratios),
        Err(err) => {
            assert!(matches!(err, TuningError::InvalidNumericInput { step: 3, .. }));
        }
    }
    assert_eq!(tuning, before);
}

#[test]
fn test_sweep_is_monotonic_for_linear() {
    let source = Tuning::from_preset(Preset::TwelveTet).unwrap();
    let dest = Tuning::from_preset(Preset::Ptolemy).unwrap();
    let builder = TrajectoryBuilder::between(&source, &dest).unwrap();
    assert_eq!(builder.degree_count(), 12);

    let steps = builder.sweep(11).unwrap();
    assert_eq!(steps.len(), 11);

    // 12-TET major third is sharp of 5/4
    for pair in steps.windows(2) {
        assert!(pair[1].ratios()[4] <= pair[0].ratios()[4]);
    }
}

#[test]
fn test_playback_lookup_follows_morph() {
    let morph = build_interpolated(
        &Preset::TwelveTet.ratios(),
        &Preset::Pythagorean.ratios(),
        1.0,
        CurveKind::Linear,
    )
    .unwrap();

    // G4 in Pythagorean tuning over Middle C
    let g4 = morph.frequency_for_pitch(67.0).unwrap();
    assert!((g4 - morph.reference_frequency() * 1.5).abs() < 1e-6);
}
