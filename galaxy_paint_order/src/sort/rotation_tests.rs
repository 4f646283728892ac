use super::*;

#[test]
fn test_try_from_valid_values() {
    assert_eq!(Rotation::try_from(0), Ok(Rotation::R0));
    assert_eq!(Rotation::try_from(1), Ok(Rotation::R90));
    assert_eq!(Rotation::try_from(2), Ok(Rotation::R180));
    assert_eq!(Rotation::try_from(3), Ok(Rotation::R270));
}

#[test]
fn test_try_from_rejects_out_of_range() {
    for value in [4u8, 5, 128, 255] {
        assert_eq!(Rotation::try_from(value), Err(Error::InvalidRotation(value)));
    }
}

#[test]
fn test_index_round_trip() {
    for (i, rotation) in Rotation::ALL.iter().enumerate() {
        assert_eq!(rotation.index(), i);
        assert_eq!(Rotation::try_from(u8::from(*rotation)), Ok(*rotation));
    }
}
