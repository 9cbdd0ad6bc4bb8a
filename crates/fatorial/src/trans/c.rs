use super::tac::{Function, Instr, Operand, Unit};
use super::{Sink, Trans};
use crate::config::FatConfig;
use crate::error::FatResult;
use crate::input::INPUT_BUFFER_SIZE;

const INCLUDES: [&str; 4] = ["stdio.h", "stdlib.h", "string.h", "stdbool.h"];

/// Runtime helpers backing `input()`: a fixed line buffer, a newline
/// stripping string reader and an `atoi` based number reader.
const INPUT_RUNTIME: &str = r#"// Read string input (returns dynamically allocated string)
char* __read_string_input(const char* prompt) {
    if (prompt != NULL) {
        printf("%s", prompt);
    }
    if (fgets(__input_buffer, INPUT_BUFFER_SIZE, stdin) != NULL) {
        // Remove trailing newline if present
        size_t len = strlen(__input_buffer);
        if (len > 0 && __input_buffer[len-1] == '\n') {
            __input_buffer[len-1] = '\0';
        }
        // Return a copy of the input
        char* result = (char*)malloc(strlen(__input_buffer) + 1);
        strcpy(result, __input_buffer);
        return result;
    }
    return NULL;
}

// Read number input
int __read_number_input(const char* prompt) {
    char* str_input = __read_string_input(prompt);
    if (str_input != NULL) {
        int result = atoi(str_input);
        free(str_input);
        return result;
    }
    return 0;
}"#;

/// Emits a standalone C translation unit from three-address code.
pub struct CTrans {
    indent: usize,
    last_label: bool,
}

impl CTrans {
    pub fn new() -> Self {
        Self {
            indent: 0,
            last_label: false,
        }
    }

    fn emit(&mut self, sink: &mut Sink, line: &str) -> FatResult<()> {
        sink.print("    ".repeat(self.indent).as_bytes())?;
        sink.println(line.as_bytes())
    }

    fn blank(&mut self, sink: &mut Sink) -> FatResult<()> {
        sink.println(b"")
    }

    fn headers(&mut self, sink: &mut Sink) -> FatResult<()> {
        for include in INCLUDES {
            self.emit(sink, &format!("#include <{}>", include))?;
        }
        self.blank(sink)?;
        self.emit(sink, "// Input handling")?;
        self.emit(sink, &format!("#define INPUT_BUFFER_SIZE {}", INPUT_BUFFER_SIZE))?;
        self.emit(sink, "char __input_buffer[INPUT_BUFFER_SIZE];")?;
        self.blank(sink)?;
        for line in INPUT_RUNTIME.lines() {
            sink.println(line.as_bytes())?;
        }
        self.blank(sink)
    }

    fn declarations(&mut self, unit: &Unit, sink: &mut Sink) -> FatResult<()> {
        if !unit.functions.is_empty() {
            self.emit(sink, "// Forward declarations")?;
            for f in &unit.functions {
                self.emit(sink, &format!("{};", signature(f)))?;
            }
            self.blank(sink)?;
        }
        if !unit.globals.is_empty() {
            self.emit(sink, "// Global variables")?;
            for name in &unit.globals {
                self.emit(sink, &format!("int {};  // Global variable", name))?;
            }
            self.blank(sink)?;
        }
        Ok(())
    }

    fn temps(&mut self, temps: &[usize], sink: &mut Sink) -> FatResult<()> {
        if temps.is_empty() {
            return Ok(());
        }
        self.emit(sink, "// Temporary variables")?;
        for t in temps {
            self.emit(sink, &format!("int t{} = 0;", t))?;
        }
        self.blank(sink)
    }

    fn function(&mut self, f: &Function, sink: &mut Sink) -> FatResult<()> {
        self.emit(sink, &format!("{} {{", signature(f)))?;
        self.indent += 1;
        self.last_label = false;
        self.temps(&f.temps(), sink)?;
        for instr in &f.body {
            self.instr(instr, sink)?;
        }
        self.close_label(sink)?;
        self.indent -= 1;
        self.emit(sink, "}")?;
        self.blank(sink)
    }

    fn main(&mut self, unit: &Unit, sink: &mut Sink) -> FatResult<()> {
        self.emit(sink, "int main() {")?;
        self.indent += 1;
        self.last_label = false;
        self.temps(&unit.main_temps(), sink)?;
        for instr in &unit.main {
            self.instr(instr, sink)?;
        }
        self.close_label(sink)?;
        self.blank(sink)?;
        self.emit(sink, "return 0;")?;
        self.indent -= 1;
        self.emit(sink, "}")
    }

    // a label may not end a block in C
    fn close_label(&mut self, sink: &mut Sink) -> FatResult<()> {
        if self.last_label {
            self.emit(sink, ";  // Empty statement after label")?;
            self.last_label = false;
        }
        Ok(())
    }

    fn instr(&mut self, instr: &Instr, sink: &mut Sink) -> FatResult<()> {
        let line = match instr {
            Instr::Label(l) => {
                self.indent -= 1;
                self.emit(sink, &format!("L{}:", l))?;
                self.indent += 1;
                self.last_label = true;
                return Ok(());
            }
            Instr::Binary { op, left, right, result } => {
                format!("t{} = {} {} {};", result, operand(left), op, operand(right))
            }
            Instr::Assign { target, value } => format!("{} = {};", target, operand(value)),
            Instr::IfFalse { cond, label } => format!("if (!{}) goto L{};", operand(cond), label),
            Instr::Goto(l) => format!("goto L{};", l),
            Instr::Return(value) => format!("return {};", operand(value)),
            Instr::Call { func, args, .. } if func == "print" => printf(args),
            Instr::Call { func, args, result } => {
                let args = args.iter().map(operand).collect::<Vec<_>>().join(", ");
                match result {
                    Some(t) => format!("t{} = {}({});", t, func, args),
                    None => format!("{}({});", func, args),
                }
            }
        };
        self.last_label = false;
        self.emit(sink, &line)
    }
}

impl Default for CTrans {
    fn default() -> Self {
        Self::new()
    }
}

impl Trans for CTrans {
    fn trans(&mut self, unit: &Unit, sink: &mut Sink) -> FatResult<()> {
        self.headers(sink)?;
        self.declarations(unit, sink)?;
        for f in &unit.functions {
            self.function(f, sink)?;
        }
        self.main(unit, sink)
    }
}

fn signature(f: &Function) -> String {
    let params = f
        .params
        .iter()
        .map(|p| format!("int {}", p))
        .collect::<Vec<_>>()
        .join(", ");
    format!("int {}({})", f.name, params)
}

fn printf(args: &[Operand]) -> String {
    if args.is_empty() {
        return r#"printf("\n");"#.to_string();
    }
    let format = args
        .iter()
        .map(|a| if matches!(a, Operand::Str(_)) { "%s" } else { "%d" })
        .collect::<Vec<_>>()
        .join(" ");
    let args = args.iter().map(operand).collect::<Vec<_>>().join(", ");
    format!(r#"printf("{}\n", {});"#, format, args)
}

fn operand(op: &Operand) -> String {
    match op {
        Operand::Temp(t) => format!("t{}", t),
        Operand::Var(name) => name.clone(),
        Operand::Int(i) => i.to_string(),
        Operand::Str(s) => c_string(s),
    }
}

/// Quotes `s` as a C string literal. Non-printable bytes use octal escapes
/// so a following digit can't extend them.
pub fn c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for &b in s.as_bytes() {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            b'\r' => out.push_str("\\r"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\{:03o}", b)),
        }
    }
    out.push('"');
    out
}

/// C source for the program `config` describes.
pub fn transpile_c(config: &FatConfig) -> FatResult<String> {
    let unit = super::tac::lower(config);
    let mut sink = Sink::new("fatorial.c");
    let mut trans = CTrans::new();
    trans.trans(&unit, &mut sink)?;
    sink.done()
}
