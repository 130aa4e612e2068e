mod support;

use pgframe::frames::ReadyForQueryFrame;
use pgframe::shared_types::TransactionStatus;
use pgframe::{
    BackendDecoder, BackendProtocolMessage, BackendReader, Charset, DecodeError, DecoderConfig,
    ReaderError, SessionContext,
};
use support::{encode_all, every_kind, frame, parameter_status};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

#[tokio::test]
async fn forwards_a_chunked_stream_in_order() {
    support::init_tracing();

    let messages = every_kind();
    let bytes = encode_all(&messages, Charset::utf8());

    let (mut server, client) = tokio::io::duplex(256);
    let config = DecoderConfig::default().with_initial_charset(Charset::utf8());
    let reader = BackendReader::new(client, config);
    let (tx, mut rx) = mpsc::channel(4);

    let writer = tokio::spawn(async move {
        // uneven chunk sizes, cycling
        let mut offset = 0;
        for size in [1usize, 7, 3, 64, 2, 5].into_iter().cycle() {
            if offset >= bytes.len() {
                break;
            }
            let end = (offset + size).min(bytes.len());
            server.write_all(&bytes[offset..end]).await.unwrap();
            offset = end;
        }
    });
    let feeder = tokio::spawn(reader.run(tx));

    let mut received = Vec::new();
    while let Some(message) = rx.recv().await {
        received.push(message);
    }

    writer.await.unwrap();
    feeder.await.unwrap().unwrap();
    assert_eq!(received, messages);
}

#[tokio::test]
async fn connection_shares_session_with_reader() {
    support::init_tracing();

    let session = SessionContext::new(Charset::Ascii);
    let decoder = BackendDecoder::with_session(DecoderConfig::default(), session.clone());

    let mut bytes = parameter_status("client_encoding", b"WIN1251");
    bytes.extend(parameter_status("application_name", b"\xCF\xF0\xE8\xE2\xE5\xF2"));
    bytes.extend(frame(b'Z', b"I"));

    let mut reader = BackendReader::with_decoder(&bytes[..], decoder);

    reader.next_message().await.unwrap();
    assert_eq!(session.charset(), Charset::from_pg_name("WIN1251").unwrap());

    match reader.next_message().await.unwrap() {
        Some(BackendProtocolMessage::ParameterStatus(status)) => {
            assert_eq!(status.value, "Привет")
        }
        other => panic!("expected ParameterStatus, got {other:?}"),
    }

    assert_eq!(
        reader.next_message().await.unwrap(),
        Some(BackendProtocolMessage::ReadyForQuery(ReadyForQueryFrame {
            status: TransactionStatus::Idle
        }))
    );
    assert_eq!(reader.next_message().await.unwrap(), None);
}

#[tokio::test]
async fn protocol_error_ends_the_run() {
    support::init_tracing();

    let mut bytes = frame(b'Z', b"I");
    bytes.extend(frame(b'Z', b"?"));
    bytes.extend(frame(b'Z', b"I"));

    let reader = BackendReader::new(&bytes[..], DecoderConfig::default());
    let (tx, mut rx) = mpsc::channel(8);

    match reader.run(tx).await {
        Err(ReaderError::Decode(DecodeError::UnknownTxnStatus(b'?'))) => {}
        other => panic!("expected UnknownTxnStatus, got {other:?}"),
    }

    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn truncated_stream_reports_pending_bytes() {
    support::init_tracing();

    let bytes = frame(b'C', b"SELECT 1\0");
    let mut reader = BackendReader::new(&bytes[..bytes.len() - 2], DecoderConfig::default());

    match reader.next_message().await {
        Err(ReaderError::UnexpectedEof { pending }) => assert_eq!(pending, bytes.len() - 2),
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

#[test]
fn config_from_host_toml() {
    let config: DecoderConfig = toml::from_str(
        r#"
            initial_charset = "utf-8"
            max_frame_len = 1048576
        "#,
    )
    .unwrap();

    assert_eq!(config.initial_charset, Charset::utf8());
    assert_eq!(config.max_frame_len, 1 << 20);

    let decoder = BackendDecoder::new(config);
    assert_eq!(decoder.charset(), Charset::utf8());
    assert_eq!(decoder.max_frame_len(), 1 << 20);
}
