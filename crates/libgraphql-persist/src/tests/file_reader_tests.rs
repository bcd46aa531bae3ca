use crate::file_reader::ReadContentError;
use crate::file_reader::read_content;

#[tokio::test]
async fn reads_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.graphql");
    std::fs::write(&path, "query Q { a }").unwrap();

    assert_eq!(read_content(&path).await.unwrap(), "query Q { a }");
}

#[tokio::test]
async fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        read_content(dir.path()).await,
        Err(ReadContentError::PathIsNotAFile(path)) if path == dir.path(),
    ));
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        read_content(dir.path().join("missing.graphql")).await,
        Err(ReadContentError::FileReadError { err, .. })
            if err.kind() == std::io::ErrorKind::NotFound,
    ));
}

#[tokio::test]
async fn invalid_utf8_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("q.graphql");
    std::fs::write(&path, [0xff, 0xfe, b'a']).unwrap();

    assert!(matches!(
        read_content(&path).await,
        Err(ReadContentError::FileDecodeError { .. }),
    ));
}
