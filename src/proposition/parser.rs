//! Line parser for proposition blocks.

use super::{Triple, DEFAULT_RELATION, DELIMITER};

/// Parse a line-oriented text block into triples.
///
/// Lines without the `->` delimiter are silently discarded, so arbitrary
/// AI output can be fed in directly. Per matching line:
///
/// - 2 segments: `A -> B` becomes `(A, "relacionado_a", B)`.
/// - 3 or more segments: the first segment is the subject, the last is
///   the object, and the interior segments joined with a single space
///   form the relation label (only the first and last delimiter are
///   semantic).
///
/// Never fails; an empty result is valid and compiles to an empty graph.
pub fn parse_propositions(text: &str) -> Vec<Triple> {
    let mut triples = Vec::new();

    for line in text.lines() {
        if !line.contains(DELIMITER) {
            continue;
        }

        let segments: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

        match segments.len() {
            0 | 1 => continue,
            2 => triples.push(Triple::new(segments[0], DEFAULT_RELATION, segments[1])),
            n => {
                let relation = segments[1..n - 1].join(" ");
                triples.push(Triple::new(segments[0], relation, segments[n - 1]));
            }
        }
    }

    triples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_segments() {
        let triples = parse_propositions("lesão celular -> pode_ser -> reversível");
        assert_eq!(
            triples,
            vec![Triple::new("lesão celular", "pode_ser", "reversível")]
        );
    }

    #[test]
    fn test_parse_two_segments_defaults_relation() {
        let triples = parse_propositions("hipóxia -> necrose");
        assert_eq!(
            triples,
            vec![Triple::new("hipóxia", DEFAULT_RELATION, "necrose")]
        );
    }

    #[test]
    fn test_parse_four_segments_joins_interior() {
        // Last segment wins as the object; interior segments form the label
        let triples = parse_propositions("a -> r1 -> r2 -> b");
        assert_eq!(triples, vec![Triple::new("a", "r1 r2", "b")]);
    }

    #[test]
    fn test_parse_discards_lines_without_delimiter() {
        let block = "não é uma linha válida\noutra linha solta";
        assert!(parse_propositions(block).is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_propositions("").is_empty());
    }

    #[test]
    fn test_parse_mixed_block() {
        let block =
            "lesão celular -> pode_ser -> reversível\nlesão celular -> causa -> dano\nnão é uma linha válida";
        let triples = parse_propositions(block);
        assert_eq!(
            triples,
            vec![
                Triple::new("lesão celular", "pode_ser", "reversível"),
                Triple::new("lesão celular", "causa", "dano"),
            ]
        );
    }

    #[test]
    fn test_parse_trims_segments() {
        let triples = parse_propositions("  a   ->   r   ->   b  ");
        assert_eq!(triples, vec![Triple::new("a", "r", "b")]);
    }
}
