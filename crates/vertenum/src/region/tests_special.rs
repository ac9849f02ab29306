//! Validation and constructor checks for regions.

use nalgebra::DVector;

use super::special::{reference_objective, reference_region, square_pyramid, unit_box};
use super::{Constraint, Direction, InputError, Objective, Region};

#[test]
fn reference_region_shape() {
    let r = reference_region();
    assert_eq!(r.dim(), 3);
    assert_eq!(r.len(), 6);
    assert!(r.constraints().iter().all(|c| c.dir == Direction::AtLeast));
    let f = reference_objective();
    assert!(r.check_objective(&f).is_ok());
    assert_eq!(f.eval(&DVector::from_row_slice(&[3.0, 1.0, 7.0])), 2.0);
}

#[test]
fn box_and_pyramid_contain_expected_points() {
    let b = unit_box(3, 2.0);
    assert_eq!(b.len(), 6);
    let corner = DVector::from_row_slice(&[2.0, -2.0, 2.0]);
    assert!(b.constraints().iter().all(|c| c.satisfies_eps(&corner, 0.0)));
    let p = square_pyramid();
    let apex = DVector::from_row_slice(&[0.0, 0.0, 1.0]);
    assert!(p.constraints().iter().all(|c| c.satisfies_eps(&apex, 0.0)));
}

#[test]
fn slack_respects_direction() {
    let x = DVector::from_row_slice(&[1.0, 2.0]);
    let ge = Constraint::at_least(&[1.0, 1.0], 3.0);
    let le = Constraint::at_most(&[1.0, 1.0], 3.0);
    assert_eq!(ge.slack(&x), 0.0);
    assert_eq!(le.slack(&x), 0.0);
    let y = DVector::from_row_slice(&[2.0, 2.0]);
    assert!(ge.satisfies_eps(&y, 0.0));
    assert!(!le.satisfies_eps(&y, 0.0));
    assert_eq!(ge.equation().b, 3.0);
}

#[test]
fn malformed_input_fails_fast() {
    assert_eq!(
        Region::new(0, vec![]).unwrap_err(),
        InputError::ZeroDimension
    );
    let err = Region::from_rows(3, &[vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0]]).unwrap_err();
    assert_eq!(
        err,
        InputError::CoefficientCount {
            index: 1,
            expected: 3,
            got: 2
        }
    );
    let err = Region::from_rows(3, &[[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0]]).unwrap_err();
    assert_eq!(err, InputError::TooFewConstraints { have: 2, need: 3 });
    let err = Region::new(
        2,
        vec![
            Constraint::at_least(&[1.0, 0.0], 0.0),
            Constraint::at_least(&[f64::NAN, 1.0], 0.0),
        ],
    )
    .unwrap_err();
    assert_eq!(err, InputError::NonFinite { index: 1 });
    assert!(!err.to_string().is_empty());
}

#[test]
fn objective_must_match_dimension() {
    let r = reference_region();
    assert_eq!(
        r.check_objective(&Objective::new(&[1.0, 2.0])),
        Err(InputError::ObjectiveDimension {
            expected: 3,
            got: 2
        })
    );
    assert_eq!(
        r.check_objective(&Objective::new(&[1.0, f64::INFINITY, 0.0])),
        Err(InputError::NonFiniteObjective)
    );
    assert!(r.check_objective(&Objective::zero(3).with_constant(5.0)).is_ok());
}

#[test]
fn from_row_reads_threshold_last() {
    let c = Constraint::from_row(&[4.0, -2.0, 1.0, 1.0]).unwrap();
    assert_eq!(c.dim(), 3);
    assert_eq!(c.b, 1.0);
    assert!(Constraint::from_row(&[]).is_none());
}
