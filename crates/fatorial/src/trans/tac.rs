//! Three-address form of the program, the input of the C emitter.
//!
//! Temporaries are numbered across the whole unit, so `main` continues where
//! the last function stopped.

use crate::config::FatConfig;
use std::fmt;

pub const FN_NAME: &str = "fatorial";
pub const PARAM: &str = "n";
pub const GLOBAL: &str = "valor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Temp(usize),
    Var(String),
    Int(i32),
    Str(String),
}

impl Operand {
    pub fn var(name: &str) -> Self {
        Operand::Var(name.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Or,
    Sub,
    Mul,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            BinOp::Eq => "==",
            BinOp::Or => "||",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
        };
        write!(f, "{}", op)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    Binary {
        op: BinOp,
        left: Operand,
        right: Operand,
        result: usize,
    },
    Assign {
        target: String,
        value: Operand,
    },
    IfFalse {
        cond: Operand,
        label: usize,
    },
    Goto(usize),
    Label(usize),
    /// `print` is a builtin; its result temp is allocated but never written.
    Call {
        func: String,
        args: Vec<Operand>,
        result: Option<usize>,
    },
    Return(Operand),
}

impl Instr {
    pub fn result(&self) -> Option<usize> {
        match self {
            Instr::Binary { result, .. } => Some(*result),
            Instr::Call { result, .. } => *result,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Instr>,
}

impl Function {
    pub fn temps(&self) -> Vec<usize> {
        temps_of(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub globals: Vec<String>,
    pub functions: Vec<Function>,
    pub main: Vec<Instr>,
}

impl Unit {
    pub fn main_temps(&self) -> Vec<usize> {
        temps_of(&self.main)
    }
}

fn temps_of(body: &[Instr]) -> Vec<usize> {
    let mut temps: Vec<usize> = body.iter().filter_map(Instr::result).collect();
    temps.sort_unstable();
    temps.dedup();
    temps
}

#[derive(Default)]
struct Builder {
    temps: usize,
    labels: usize,
}

impl Builder {
    fn temp(&mut self) -> usize {
        let t = self.temps;
        self.temps += 1;
        t
    }

    fn label(&mut self) -> usize {
        let l = self.labels;
        self.labels += 1;
        l
    }

    fn fatorial(&mut self) -> Function {
        let n = || Operand::var(PARAM);
        let (t0, t1, t2) = (self.temp(), self.temp(), self.temp());
        let (else_label, end_label) = (self.label(), self.label());
        let (t3, t4, t5) = (self.temp(), self.temp(), self.temp());
        let body = vec![
            binary(BinOp::Eq, n(), Operand::Int(0), t0),
            binary(BinOp::Eq, n(), Operand::Int(1), t1),
            binary(BinOp::Or, Operand::Temp(t0), Operand::Temp(t1), t2),
            Instr::IfFalse {
                cond: Operand::Temp(t2),
                label: else_label,
            },
            Instr::Return(Operand::Int(1)),
            Instr::Goto(end_label),
            Instr::Label(else_label),
            binary(BinOp::Sub, n(), Operand::Int(1), t3),
            call(FN_NAME, vec![Operand::Temp(t3)], t4),
            binary(BinOp::Mul, n(), Operand::Temp(t4), t5),
            Instr::Return(Operand::Temp(t5)),
            Instr::Label(end_label),
        ];
        Function {
            name: FN_NAME.to_string(),
            params: vec![PARAM.to_string()],
            body,
        }
    }

    fn main(&mut self, config: &FatConfig) -> Vec<Instr> {
        let (banner, result, line) = (self.temp(), self.temp(), self.temp());
        vec![
            call("print", vec![Operand::Str(config.banner.clone())], banner),
            Instr::Assign {
                target: GLOBAL.to_string(),
                value: Operand::Int(config.value),
            },
            call(FN_NAME, vec![Operand::var(GLOBAL)], result),
            call(
                "print",
                vec![Operand::Str(config.label.clone()), Operand::Temp(result)],
                line,
            ),
        ]
    }
}

fn binary(op: BinOp, left: Operand, right: Operand, result: usize) -> Instr {
    Instr::Binary {
        op,
        left,
        right,
        result,
    }
}

fn call(func: &str, args: Vec<Operand>, result: usize) -> Instr {
    Instr::Call {
        func: func.to_string(),
        args,
        result: Some(result),
    }
}

/// Lowers the program described by `config` to three-address form.
pub fn lower(config: &FatConfig) -> Unit {
    let mut builder = Builder::default();
    let function = builder.fatorial();
    let main = builder.main(config);
    Unit {
        globals: vec![GLOBAL.to_string()],
        functions: vec![function],
        main,
    }
}
