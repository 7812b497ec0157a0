// rle.rs - Negative-count run-length coding shared by the encoder and decoder.
//
// A non-negative element is one literal value. A negative element -n is
// followed by one literal to repeat n times. Runs of length 1 are emitted as
// the bare literal, so every stored literal is non-negative and the sign
// alone separates counts from values.

use crate::error::DecodeError;

/// Compress a value sequence into the signed stream form.
pub fn pack<I>(values: I) -> Vec<i32>
where
    I: IntoIterator<Item = i32>,
{
    let mut out = Vec::new();
    let mut current: Option<i32> = None;
    let mut run = 0usize;
    for value in values {
        match current {
            Some(c) if c == value => run += 1,
            Some(c) => {
                flush(&mut out, c, run);
                current = Some(value);
                run = 1;
            }
            None => {
                current = Some(value);
                run = 1;
            }
        }
    }
    if let Some(c) = current {
        flush(&mut out, c, run);
    }
    out
}

fn flush(out: &mut Vec<i32>, value: i32, run: usize) {
    if run > 1 {
        out.push(-(run as i32));
    }
    out.push(value);
}

/// Expand a signed stream into exactly `expected` elements of `T`.
///
/// Fails if a repeat marker has no following literal, if a literal is
/// negative, if a literal does not convert into `T`, or if the expanded
/// length differs from `expected`.
pub fn unpack<T>(stream: &[i32], expected: usize) -> Result<Vec<T>, DecodeError>
where
    T: Copy + TryFrom<i32>,
{
    // The declared count is input too; reserve only what the packed
    // length itself justifies.
    let mut out = Vec::with_capacity(expected.min(stream.len()));
    let mut iter = stream.iter().copied();
    while let Some(element) = iter.next() {
        if element < 0 {
            let count = -(element as i64) as usize;
            let literal = match iter.next() {
                Some(v) if v >= 0 => v,
                Some(v) => return Err(DecodeError::NegativeLiteral { value: v }),
                None => return Err(DecodeError::TruncatedRun),
            };
            if out.len() + count > expected {
                return Err(DecodeError::LengthMismatch {
                    expected,
                    actual: out.len() + count,
                });
            }
            let value = convert::<T>(literal)?;
            out.extend(std::iter::repeat(value).take(count));
        } else {
            out.push(convert::<T>(element)?);
        }
    }
    if out.len() != expected {
        return Err(DecodeError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }
    Ok(out)
}

fn convert<T: TryFrom<i32>>(value: i32) -> Result<T, DecodeError> {
    T::try_from(value).map_err(|_| DecodeError::ValueRange {
        value: value as i64,
    })
}
