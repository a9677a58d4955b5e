use scicalc::{evaluate, AngleMode, Error, Session};
use test_case::test_case;

fn approx(session: &mut Session, input: &str) -> f64 {
    session.compute(input).unwrap().unwrap()
}

#[test_case("2 + 3 * 4" => Ok("14".to_string()) ; "precedence")]
#[test_case("10 - 2 ^ 3" => Ok("2".to_string()) ; "power before subtraction")]
#[test_case("100 / 10 / 2" => Ok("5".to_string()) ; "division is left associative")]
#[test_case("2 ^ 3 ^ 2" => Ok("512".to_string()) ; "power is right associative")]
#[test_case("0.1 + 0.2" => Ok("0.30000000000000004".to_string()) ; "floating point")]
#[test_case("sqrt(16)" => Ok("4".to_string()) ; "square root")]
#[test_case("5!" => Ok("120".to_string()) ; "factorial")]
#[test_case("25%" => Ok("0.25".to_string()) ; "percent")]
#[test_case("recip(8)" => Ok("0.125".to_string()) ; "reciprocal")]
#[test_case("cube(2)" => Ok("8".to_string()) ; "cube")]
#[test_case("" => Ok(String::new()) ; "empty input")]
#[test_case("10 / 0" => Err(Error::DivisionByZero) ; "division by zero")]
#[test_case("2 + 3 )" => Err(Error::ParenMismatch) ; "unbalanced")]
#[test_case("2 + + 3" => Err(Error::StackUnderflow) ; "doubled operator")]
#[test_case("0 ^ -1" => Err(Error::DivisionByZero) ; "negative power of zero")]
#[test_case("√(abc)" => Err(Error::TokenError("abc".into())) ; "unknown name inside function")]
fn evaluation(input: &str) -> Result<String, Error> {
    evaluate(input, &mut Session::new())
}

#[test_case("sqrt(-1)" ; "square root")]
#[test_case("log(0)" ; "logarithm")]
#[test_case("asin(2)" ; "inverse sine")]
#[test_case("2.5!" ; "fractional factorial")]
#[test_case("(-3)!" ; "negative factorial")]
fn domain_errors(input: &str) {
    let result = Session::new().evaluate(input);
    assert!(matches!(result, Err(Error::DomainError(_))), "{:?}", result);
}

#[test]
fn angle_modes() {
    let mut session = Session::new();
    session.set_angle_mode(AngleMode::Degrees);
    assert!((approx(&mut session, "sin(30)") - 0.5).abs() < 1e-10);
    assert!((approx(&mut session, "asin(0.5)") - 30.0).abs() < 1e-8);

    session.set_angle_mode(AngleMode::Radians);
    assert!((approx(&mut session, "sin(1.5707963267948966)") - 1.0).abs() < 1e-10);
}

#[test]
fn ans_persistence() {
    let mut session = Session::new();
    assert_eq!(session.evaluate("7 * 8"), Ok("56".into()));
    assert_eq!(session.evaluate("1 / 0"), Err(Error::DivisionByZero));
    assert_eq!(session.evaluate("Ans + 4"), Ok("60".into()));
}

#[test]
fn idempotence() {
    let mut session = Session::new();
    let first = session.evaluate("2π + sin 45 * 3!");
    let second = session.evaluate("2π + sin 45 * 3!");
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn independent_sessions() {
    let mut degrees = Session::new();
    let mut radians = Session::with_angle_mode(AngleMode::Radians);
    degrees.evaluate("90").unwrap();
    radians.evaluate("1").unwrap();

    assert_eq!(degrees.evaluate("sin Ans"), Ok("1".into()));
    assert_eq!(radians.evaluate("Ans * 2"), Ok("2".into()));
}
