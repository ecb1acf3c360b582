use qdpeek::{DecodeError, DnsPacket};

fn query(id: u16, names: &[&str]) -> Vec<u8> {
    let mut data = id.to_be_bytes().to_vec();
    data.extend_from_slice(&[0x01, 0x00]);
    data.extend_from_slice(&(names.len() as u16).to_be_bytes());
    data.extend_from_slice(&[0; 6]);
    for name in names {
        for label in name.split('.') {
            data.push(label.len() as u8);
            data.extend_from_slice(label.as_bytes());
        }
        data.extend_from_slice(&[0, 0, 1, 0, 1]);
    }
    data
}

#[test]
fn decodes_reference_query() {
    let packet = DnsPacket::parse(&[
        48, 57, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 7, 101, 120, 97, 109, 112, 108, 101, 3, 99, 111, 109,
        0, 0, 1, 0, 1,
    ])
    .unwrap();

    assert_eq!(packet.header.id, 12345);
    assert_eq!(packet.header.qdcount, 1);
    assert_eq!(packet.questions()[0].name.to_string(), "example.com");
}

#[test]
fn trailing_resource_records_are_ignored() {
    let mut data = query(1, &["www.example.org"]);
    // an answer RR with a compression pointer back to the question
    data.extend_from_slice(&[0xc0, 0x0c, 0, 1, 0, 1, 0, 0, 0x0e, 0x10, 0, 4, 127, 0, 0, 1]);

    let packet = DnsPacket::parse(&data).unwrap();
    assert_eq!(packet.questions().len(), 1);
    assert_eq!(packet.questions()[0].to_string(), "www.example.org");
}

#[test]
fn every_prefix_of_a_valid_query_fails_cleanly() {
    let data = query(7, &["a.example", "b.example"]);
    assert!(DnsPacket::parse(&data).is_ok());

    for len in 0..data.len() {
        let err = DnsPacket::parse(&data[..len]).unwrap_err();
        assert!(
            matches!(
                err,
                DecodeError::TooShort { .. }
                    | DecodeError::MalformedName { .. }
                    | DecodeError::Truncated { .. }
            ),
            "prefix {len}: {err}"
        );
    }
}

#[test]
fn errors_render_for_logs() {
    let err = DnsPacket::parse(&[0; 3]).unwrap_err();
    assert_eq!(err.to_string(), "packet too short: need 12 bytes, got 3");
}
