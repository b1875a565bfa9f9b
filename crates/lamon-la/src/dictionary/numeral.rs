// Numeral detection for normalized tokens
//
// Accepts Arabic numerals (digits with '.' and ',' separators) and
// lowercase Roman numerals in canonical order. `v` and `u` are the same
// letter here, since normalization folds one into the other.

const ROMAN_DIGITS: &[u8] = b"iuxlcdm";

/// True if `token` reads as a number.
pub fn is_numeral(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if bytes
        .iter()
        .all(|&b| b.is_ascii_digit() || b == b'.' || b == b',')
        && bytes.iter().any(u8::is_ascii_digit)
    {
        return true;
    }
    let folded: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == b'v' { b'u' } else { b })
        .collect();
    folded.iter().all(|b| ROMAN_DIGITS.contains(b)) && is_roman(&folded)
}

/// Cursor over a Roman numeral.
struct Roman<'a> {
    rest: &'a [u8],
}

impl Roman<'_> {
    fn peek(&self) -> Option<u8> {
        self.rest.first().copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.rest = &self.rest[1..];
            true
        } else {
            false
        }
    }

    fn eat_up_to(&mut self, b: u8, n: usize) {
        for _ in 0..n {
            if !self.eat(b) {
                break;
            }
        }
    }

    fn done(&self) -> bool {
        self.rest.is_empty()
    }

    /// One decimal place: `one` starts 1-4 and 9 (`one` + `ten`),
    /// `five` starts 5-8.
    fn place(&mut self, one: u8, five: u8, ten: u8) {
        if self.eat(one) {
            if !(self.eat(ten) || self.eat(five)) && self.eat(one) {
                self.eat(one);
            }
        } else if self.eat(five) {
            self.eat_up_to(one, 3);
        }
    }
}

fn is_roman(token: &[u8]) -> bool {
    let mut r = Roman { rest: token };
    r.eat_up_to(b'm', 4);
    if r.done() {
        return true;
    }
    r.place(b'c', b'd', b'm');
    if r.done() {
        return true;
    }
    r.place(b'x', b'l', b'c');
    if r.done() {
        return true;
    }
    // units allow "iiii"
    if r.eat(b'i') {
        if !(r.eat(b'x') || r.eat(b'u')) && r.eat(b'i') {
            r.eat_up_to(b'i', 2);
        }
    } else if r.eat(b'u') {
        r.eat_up_to(b'i', 3);
    }
    r.done()
}
