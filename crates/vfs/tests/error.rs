use vfs::FsError;

#[test]
fn test_status_codes() {
    assert_eq!(FsError::NotFound.to_status(), -2);
    assert_eq!(FsError::AlreadyExists.to_status(), -183);
    assert_eq!(FsError::InvalidName.to_status(), -1);
    assert_eq!(FsError::InvalidAttributeTransition.to_status(), -1);
    assert_eq!(FsError::KindMismatch.to_status(), -1);
    assert_eq!(FsError::CapacityExceeded.to_status(), -1);
    assert_eq!(FsError::GenericFailure.to_status(), -1);
}

#[test]
fn test_status_of_result() {
    let ok: Result<usize, FsError> = Ok(5);
    let err: Result<usize, FsError> = Err(FsError::NotFound);
    assert_eq!(FsError::status_of(&ok), 0);
    assert_eq!(FsError::status_of(&err), -2);
}

#[test]
fn test_display() {
    assert_eq!(FsError::AlreadyExists.to_string(), "file exists");
}
