use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, fs::File, io::BufReader};
use tracing::{info, warn};
use vector::{ops, repr::bounded_components, Operand, ReprLimits, Scalar, Vector, VectorError};

const WALKTHROUGH: &str = r#"[
    {"op": "add", "lhs": {"vector": [4, 2, 7]}, "rhs": {"vector": [1, -1, 3]}, "expect": {"vector": [5, 1, 10]}},
    {"op": "add", "lhs": {"vector": [4, 2, 7]}, "rhs": {"list": [-1, -1, 3]}, "expect": {"vector": [3, 1, 10]}},
    {"op": "add", "lhs": {"list": [-1, -1, 3]}, "rhs": {"vector": [4, 2, 7]}, "expect": {"vector": [3, 1, 10]}},
    {"op": "add", "lhs": {"vector": [4, 2, 7]}, "rhs": {"range": [0, 3]}, "expect": {"vector": [4, 3, 9]}},
    {"op": "add", "lhs": {"vector": [4, 2, 7]}, "rhs": {"range": [0, 2]}, "expect": {"vector": [4, 3, 7]}},
    {"op": "add", "lhs": {"range": [0, 2]}, "rhs": {"vector": [4, 2, 7]}, "expect": {"vector": [4, 3, 7]}},
    {"op": "add", "lhs": {"vector": [1, 2, 3]}, "rhs": {"vector": [10, 20, 30, 40, 50]}, "expect": {"vector": [11, 22, 33, 40, 50]}},
    {"op": "add", "lhs": {"vector": [4, 2, 7]}, "rhs": {"list": []}, "expect": {"vector": [4, 2, 7]}},
    {"op": "add", "lhs": {"vector": [1, 2, 3]}, "rhs": {"text": "not-a-sequence-of-numbers"}, "expect": "unsupported"},
    {"op": "mul", "lhs": {"vector": [4, 2, 7]}, "rhs": {"scalar": 3}, "expect": {"vector": [12, 6, 21]}},
    {"op": "mul", "lhs": {"scalar": 3}, "rhs": {"vector": [4, 2, 7]}, "expect": {"vector": [12, 6, 21]}},
    {"op": "dot", "lhs": {"vector": [4, 2, 7]}, "rhs": {"vector": [1, -1, 3]}, "expect": {"scalar": 23}},
    {"op": "dot", "lhs": {"vector": [1, -1, 3]}, "rhs": {"vector": [4, 2, 7]}, "expect": {"scalar": 23}},
    {"op": "dot", "lhs": {"vector": [4, 2, 7]}, "rhs": {"list": [-1, -1, 3]}, "expect": {"scalar": 15}},
    {"op": "dot", "lhs": {"list": [-1, -1, 3]}, "rhs": {"vector": [4, 2, 7]}, "expect": {"scalar": 15}}
]"#;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arg {
    Vector(Vec<Value>),
    List(Vec<Value>),
    Range(i64, i64),
    Text(String),
    Scalar(Scalar),
}

impl Arg {
    fn operand(&self) -> Option<Box<dyn Operand + '_>> {
        let operand: Box<dyn Operand + '_> = match self {
            Arg::Vector(items) => Box::new(Vector::new(items.as_slice())),
            Arg::List(items) => Box::new(items.as_slice()),
            Arg::Range(start, end) => Box::new(*start..*end),
            Arg::Text(text) => Box::new(text.as_str()),
            Arg::Scalar(_) => return None,
        };
        Some(operand)
    }

    fn type_name(&self) -> &'static str {
        match self {
            Arg::Scalar(_) => "Scalar",
            _ => self.operand().map_or("?", |op| op.type_name()),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limits = ReprLimits::default();
        match self {
            Arg::Vector(items) => write!(f, "{}", Vector::new(items.as_slice())),
            Arg::List(items) => f.write_str(&bounded_components(items.as_slice(), &limits)),
            Arg::Range(start, end) => write!(f, "{}..{}", start, end),
            Arg::Text(text) => write!(f, "{:?}", text),
            Arg::Scalar(k) => write!(f, "{}", k),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Add,
    Mul,
    Dot,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Mul => "*",
            Op::Dot => "@",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expect {
    Vector(Vec<Scalar>),
    Scalar(Scalar),
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub op: Op,
    pub lhs: Arg,
    pub rhs: Arg,
    pub expect: Expect,
}

#[derive(Debug, PartialEq)]
pub enum Evaluated {
    Vector(Vector),
    Scalar(Scalar),
    Error(VectorError),
}

impl fmt::Display for Evaluated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluated::Vector(v) => write!(f, "{}", v),
            Evaluated::Scalar(s) => write!(f, "{}", s),
            Evaluated::Error(err) => write!(f, "error: {}", err),
        }
    }
}

impl Case {
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.lhs, self.op.symbol(), self.rhs)
    }

    fn unsupported(&self) -> VectorError {
        VectorError::UnsupportedOperands {
            op: self.op.symbol(),
            lhs: self.lhs.type_name(),
            rhs: self.rhs.type_name(),
        }
    }

    pub fn evaluate(&self) -> Evaluated {
        let result = match self.op {
            Op::Add => match (self.lhs.operand(), self.rhs.operand()) {
                (Some(lhs), Some(rhs)) => ops::add(&*lhs, &*rhs).map(Evaluated::Vector),
                _ => Err(self.unsupported()),
            },
            Op::Dot => match (self.lhs.operand(), self.rhs.operand()) {
                (Some(lhs), Some(rhs)) => ops::dot(&*lhs, &*rhs).map(Evaluated::Scalar),
                _ => Err(self.unsupported()),
            },
            Op::Mul => match (&self.lhs, &self.rhs) {
                (Arg::Scalar(a), Arg::Scalar(b)) => Ok(Evaluated::Scalar(*a * *b)),
                (Arg::Scalar(k), other) | (other, Arg::Scalar(k)) => match other.operand() {
                    Some(v) => ops::scale(&*v, *k).map(Evaluated::Vector),
                    None => Err(self.unsupported()),
                },
                _ => Err(self.unsupported()),
            },
        };
        result.unwrap_or_else(Evaluated::Error)
    }

    pub fn check(&self, evaluated: &Evaluated) -> bool {
        match (&self.expect, evaluated) {
            (Expect::Vector(expected), Evaluated::Vector(v)) => {
                *v == Vector::new(expected.as_slice())
            }
            (Expect::Scalar(expected), Evaluated::Scalar(s)) => expected == s,
            (Expect::Unsupported, Evaluated::Error(VectorError::UnsupportedOperands { .. })) => {
                true
            }
            _ => false,
        }
    }
}

pub fn walkthrough() -> serde_json::Result<Vec<Case>> {
    serde_json::from_str(WALKTHROUGH)
}

pub fn load_cases(path: &str) -> anyhow::Result<Vec<Case>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let cases = serde_json::from_reader(reader)?;

    Ok(cases)
}

/// Evaluates every case, echoing it to stdout. Returns the number of cases
/// whose result didn't match the expectation.
pub fn run(cases: &[Case]) -> usize {
    let mut failures = 0;
    for (index, case) in cases.iter().enumerate() {
        let expression = case.expression();
        let evaluated = case.evaluate();
        println!(">>> {}", expression);
        println!("{}", evaluated);
        if case.check(&evaluated) {
            info!(index, %expression, "ok");
        } else {
            warn!(index, %expression, expected = ?case.expect, got = %evaluated, "mismatch");
            failures += 1;
        }
    }
    failures
}
