use crate::{
    ast::{Node, NodeKind, Span},
    error::ParseError,
    parser::{ExprParser, Rule},
};
use lazy_static::lazy_static;
use pest::{
    Parser,
    iterators::{Pair, Pairs},
    pratt_parser::{Assoc, Op, PrattParser},
};
use tracing::trace;

pub type BuildResult<T> = Result<T, ParseError>;

/// Deepest expression tree the builder produces.
pub const MAX_DEPTH: usize = 256;

/// Deepest bracket and ternary nesting accepted before running the grammar.
pub const MAX_NESTING: usize = 64;

lazy_static! {
    // Lowest binding power first.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(Op::infix(Rule::op_or, Assoc::Left))
        .op(Op::infix(Rule::op_and, Assoc::Left))
        .op(Op::infix(Rule::op_eq, Assoc::Left)
            | Op::infix(Rule::op_ne, Assoc::Left)
            | Op::infix(Rule::op_lt, Assoc::Left)
            | Op::infix(Rule::op_gt, Assoc::Left)
            | Op::infix(Rule::op_le, Assoc::Left)
            | Op::infix(Rule::op_ge, Assoc::Left)
            | Op::infix(Rule::op_in, Assoc::Left)
            | Op::infix(Rule::op_matches, Assoc::Left)
            | Op::infix(Rule::op_contains, Assoc::Left)
            | Op::infix(Rule::op_starts_with, Assoc::Left)
            | Op::infix(Rule::op_ends_with, Assoc::Left))
        .op(Op::infix(Rule::op_add, Assoc::Left) | Op::infix(Rule::op_sub, Assoc::Left))
        .op(Op::prefix(Rule::op_not))
        .op(Op::infix(Rule::op_mul, Assoc::Left)
            | Op::infix(Rule::op_div, Assoc::Left)
            | Op::infix(Rule::op_mod, Assoc::Left))
        .op(Op::prefix(Rule::op_neg) | Op::prefix(Rule::op_plus))
        .op(Op::infix(Rule::op_pow, Assoc::Right))
        .op(Op::infix(Rule::op_coalesce, Assoc::Left));
}

/// Parse filter expression text into an AST.
pub fn parse(input: &str) -> BuildResult<Node> {
    check_nesting(input)?;

    let mut pairs =
        ExprParser::parse(Rule::program, input).map_err(ParseError::from_pest_error)?;

    let program = pairs.next().ok_or(ParseError::UnexpectedRule {
        rule: "end of input".to_string(),
        line: 1,
        column: 1,
    })?;
    let span = pair_to_span(&program);
    let expression = next_pair(&mut program.into_inner(), span)?;

    let node = build_expression(expression, 0)?;
    trace!(%node, "parsed expression");
    Ok(node)
}

fn pair_to_span(pair: &Pair<Rule>) -> Span {
    let (line, column) = pair.line_col();
    let span = pair.as_span();
    Span::new(span.start(), span.end(), line, column)
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, span: Span) -> BuildResult<Pair<'i, Rule>> {
    pairs.next().ok_or(ParseError::UnexpectedRule {
        rule: "end of expression".to_string(),
        line: span.line,
        column: span.column,
    })
}

fn unexpected(pair: &Pair<Rule>) -> ParseError {
    let (line, column) = pair.line_col();
    ParseError::UnexpectedRule {
        rule: format!("{:?}", pair.as_rule()),
        line,
        column,
    }
}

/// Bracket and ternary nesting recurses in the grammar itself, so it is
/// bounded on the raw text. String literals are skipped.
fn check_nesting(input: &str) -> BuildResult<()> {
    let mut depth = 0usize;
    let mut ternaries = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<char> = None;
    let (mut line, mut column) = (1, 0);
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }

        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' && q != '`' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            prev = Some(c);
            continue;
        }

        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            // ternary `?`, not `??` or `?.`
            '?' if prev != Some('?') && !matches!(chars.peek(), Some('?' | '.')) => ternaries += 1,
            _ => {}
        }

        if depth + ternaries > MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                line,
                column,
            });
        }
        prev = Some(c);
    }

    Ok(())
}

fn descend(depth: usize, by: usize, pair: &Pair<Rule>) -> BuildResult<usize> {
    let depth = depth + by;
    if depth > MAX_DEPTH {
        let (line, column) = pair.line_col();
        return Err(ParseError::TooDeep {
            limit: MAX_DEPTH,
            line,
            column,
        });
    }
    Ok(depth)
}

fn build_expression(pair: Pair<Rule>, depth: usize) -> BuildResult<Node> {
    if pair.as_rule() != Rule::expression {
        return Err(unexpected(&pair));
    }

    let depth = descend(depth, 1, &pair)?;
    let span = pair_to_span(&pair);
    let mut inner = pair.into_inner();
    let cond = build_binary_expression(next_pair(&mut inner, span)?, depth)?;

    // `cond ? then : otherwise`
    match inner.next() {
        None => Ok(cond),
        Some(then) => {
            let then = build_expression(then, depth)?;
            let otherwise = build_expression(next_pair(&mut inner, span)?, depth)?;
            Ok(Node::new(
                NodeKind::Conditional {
                    cond: Box::new(cond),
                    then: Box::new(then),
                    otherwise: Box::new(otherwise),
                },
                span,
            ))
        }
    }
}

fn build_binary_expression(pair: Pair<Rule>, depth: usize) -> BuildResult<Node> {
    if pair.as_rule() != Rule::binary_expr {
        return Err(unexpected(&pair));
    }

    // Every operator may add a tree level; the fold recurses per prefix op.
    let operators = pair
        .clone()
        .into_inner()
        .filter(|p| p.as_rule() != Rule::postfix_expr)
        .count();
    let depth = descend(depth, operators, &pair)?;

    PRATT_PARSER
        .map_primary(|primary| build_postfix_expression(primary, depth))
        .map_prefix(|op, operand| {
            let operand = operand?;
            let span = pair_to_span(&op).to(operand.span);
            Ok(Node::new(
                NodeKind::Unary {
                    operator: op.as_str().to_string(),
                    node: Box::new(operand),
                },
                span,
            ))
        })
        .map_infix(|left, op, right| {
            let left = left?;
            let right = right?;
            let span = left.span.to(right.span);
            Ok(Node::new(
                NodeKind::Binary {
                    operator: op.as_str().to_string(),
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            ))
        })
        .parse(pair.into_inner())
}

fn build_postfix_expression(pair: Pair<Rule>, depth: usize) -> BuildResult<Node> {
    if pair.as_rule() != Rule::postfix_expr {
        return Err(unexpected(&pair));
    }

    // accessors plus a possible `Chain` wrapper
    let accessors = pair.clone().into_inner().count();
    let depth = descend(depth, accessors, &pair)?;

    let span = pair_to_span(&pair);
    let mut inner = pair.into_inner();
    let mut node = build_primary(next_pair(&mut inner, span)?, depth)?;
    let mut chained = false;

    for accessor in inner {
        let accessor_span = pair_to_span(&accessor);
        let (property, optional) = match accessor.as_rule() {
            Rule::member_access | Rule::optional_access => {
                let optional = accessor.as_rule() == Rule::optional_access;
                let name = next_pair(&mut accessor.into_inner(), accessor_span)?;
                let property = Node::new(
                    NodeKind::String(name.as_str().to_string()),
                    pair_to_span(&name),
                );
                (property, optional)
            }
            Rule::index_access => {
                let index = next_pair(&mut accessor.into_inner(), accessor_span)?;
                (build_expression(index, depth)?, false)
            }
            _ => return Err(unexpected(&accessor)),
        };

        chained |= optional;
        let member_span = node.span.to(accessor_span);
        node = Node::new(
            NodeKind::Member {
                node: Box::new(node),
                property: Box::new(property),
                optional,
            },
            member_span,
        );
    }

    if chained {
        let span = node.span;
        node = Node::new(NodeKind::Chain(Box::new(node)), span);
    }

    Ok(node)
}

fn build_primary(pair: Pair<Rule>, depth: usize) -> BuildResult<Node> {
    let span = pair_to_span(&pair);

    match pair.as_rule() {
        Rule::lit_nil => Ok(Node::new(NodeKind::Nil, span)),
        Rule::lit_bool => Ok(Node::new(NodeKind::Bool(pair.as_str() == "true"), span)),
        Rule::lit_int => {
            let digits = pair.as_str().replace('_', "");
            let value = digits.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                literal: pair.as_str().to_string(),
                line: span.line,
                column: span.column,
            })?;
            Ok(Node::new(NodeKind::Integer(value), span))
        }
        Rule::lit_float => {
            let digits = pair.as_str().replace('_', "");
            let value = digits
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber {
                    literal: pair.as_str().to_string(),
                    line: span.line,
                    column: span.column,
                })?;
            Ok(Node::new(NodeKind::Float(value), span))
        }
        Rule::lit_string => {
            let value = parse_string_literal(pair.as_str(), span)?;
            Ok(Node::new(NodeKind::String(value), span))
        }
        Rule::ident => Ok(Node::new(
            NodeKind::Identifier(pair.as_str().to_string()),
            span,
        )),
        Rule::call => build_call(pair, span, depth),
        Rule::array_lit => {
            let items = pair
                .into_inner()
                .map(|item| build_expression(item, depth))
                .collect::<BuildResult<Vec<_>>>()?;
            Ok(Node::new(NodeKind::Array(items), span))
        }
        // Grouped expression; grouping is carried by tree shape only.
        Rule::expression => build_expression(pair, depth),
        _ => Err(unexpected(&pair)),
    }
}

fn build_call(pair: Pair<Rule>, span: Span, depth: usize) -> BuildResult<Node> {
    let mut inner = pair.into_inner();
    let callee = next_pair(&mut inner, span)?.as_str().to_string();
    let arguments = inner
        .map(|argument| build_expression(argument, depth))
        .collect::<BuildResult<Vec<_>>>()?;

    Ok(Node::new(NodeKind::Call { callee, arguments }, span))
}

/// Strip the quotes of a string literal and resolve escape sequences.
/// Backtick-quoted strings are raw.
fn parse_string_literal(raw: &str, span: Span) -> BuildResult<String> {
    let quote = raw.chars().next();
    let body = &raw[1..raw.len().saturating_sub(1).max(1)];

    if quote == Some('`') {
        return Ok(body.to_string());
    }

    let invalid = |sequence: String| ParseError::InvalidEscape {
        sequence,
        line: span.line,
        column: span.column,
    };

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('`') => out.push('`'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                    .ok_or_else(|| invalid(format!("\\u{}", hex)))?;
                out.push(decoded);
            }
            Some(other) => return Err(invalid(format!("\\{}", other))),
            None => return Err(invalid("\\".to_string())),
        }
    }

    Ok(out)
}
