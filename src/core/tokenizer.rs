const DELIMITER: char = ',';
const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    Quoted,
}

/// Split one line into trimmed fields.
///
/// Commas separate fields outside quotes; inside quotes they are literal and
/// `""` stands for a single `"`. A quote left open at end of line is not an
/// error, the partial field is returned as is. An empty line gives `[""]`.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::Normal;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            ScanState::Normal => match ch {
                DELIMITER => fields.push(std::mem::take(&mut current)),
                QUOTE => state = ScanState::Quoted,
                _ => current.push(ch),
            },
            ScanState::Quoted => {
                if ch == QUOTE {
                    if chars.peek() == Some(&QUOTE) {
                        current.push(QUOTE);
                        chars.next();
                    } else {
                        state = ScanState::Normal;
                    }
                } else {
                    current.push(ch);
                }
            }
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
