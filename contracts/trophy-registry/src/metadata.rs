use soroban_sdk::{Env, String};

const NAME_PREFIX: &[u8] = b"Period Champion #";
const DESCRIPTION_PREFIX: &[u8] = b"Top score ";
const DESCRIPTION_INFIX: &[u8] = b" in the period starting at ";
/// Fits the longest description: both numbers at 20 digits.
const MAX_TEXT_LENGTH: usize = 96;

/// Display name of the trophy awarded for the window starting at `window_start`.
pub fn trophy_name(env: &Env, window_start: u64) -> String {
    let mut buf = [0u8; MAX_TEXT_LENGTH];
    let mut len = push_bytes(&mut buf, 0, NAME_PREFIX);
    len = push_decimal(&mut buf, len, window_start);
    String::from_bytes(env, &buf[..len])
}

/// Display description carrying the winning score and the window start.
pub fn trophy_description(env: &Env, score: u64, window_start: u64) -> String {
    let mut buf = [0u8; MAX_TEXT_LENGTH];
    let mut len = push_bytes(&mut buf, 0, DESCRIPTION_PREFIX);
    len = push_decimal(&mut buf, len, score);
    len = push_bytes(&mut buf, len, DESCRIPTION_INFIX);
    len = push_decimal(&mut buf, len, window_start);
    String::from_bytes(env, &buf[..len])
}

fn push_bytes(buf: &mut [u8], at: usize, bytes: &[u8]) -> usize {
    let end = at + bytes.len();
    buf[at..end].copy_from_slice(bytes);
    end
}

fn push_decimal(buf: &mut [u8], at: usize, mut value: u64) -> usize {
    let mut digits = [0u8; 20];
    let mut count = 0;
    loop {
        digits[count] = b'0' + (value % 10) as u8;
        count += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    for i in 0..count {
        buf[at + i] = digits[count - 1 - i];
    }
    at + count
}
