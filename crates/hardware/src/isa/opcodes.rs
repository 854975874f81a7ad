//! RiSC-16 Opcodes.
//!
//! Defines the 3-bit major opcodes (bits 15-13) and the closed [`Opcode`]
//! enumeration the executor dispatches on.

/// Register-register add: `regA = regB + regC`.
pub const OP_ADD: u16 = 0b000;

/// Add immediate: `regA = regB + sext(imm7)`.
pub const OP_ADDI: u16 = 0b001;

/// Register-register NAND: `regA = ~(regB & regC)`.
pub const OP_NAND: u16 = 0b010;

/// Load upper immediate: `regA = imm10 << 6`.
pub const OP_LUI: u16 = 0b011;

/// Store word: `mem[(regB << 8) + sext(imm7)] = regA`.
pub const OP_SW: u16 = 0b100;

/// Load word: `regA = mem[(regB << 8) + sext(imm7)]`.
pub const OP_LW: u16 = 0b101;

/// Branch if equal: `if regA == regB { pc = pc + 1 + sext(imm7) }`.
pub const OP_BEQ: u16 = 0b110;

/// Jump and link register: `regA = pc + 1; pc = regB`.
pub const OP_JALR: u16 = 0b111;

/// Instruction layout selected by the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `[opcode:3][regA:3][regB:3][unused:4][regC:3]`
    R,
    /// `[opcode:3][regA:3][regB:3][imm:7 signed]`
    I,
    /// `[opcode:3][regA:3][imm:10]`
    U,
}

/// One of the eight defined operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `add`
    Add,
    /// `addi`
    Addi,
    /// `nand`
    Nand,
    /// `lui`
    Lui,
    /// `sw`
    Sw,
    /// `lw`
    Lw,
    /// `beq`
    Beq,
    /// `jalr`
    Jalr,
}

impl Opcode {
    /// All opcodes in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Addi,
        Self::Nand,
        Self::Lui,
        Self::Sw,
        Self::Lw,
        Self::Beq,
        Self::Jalr,
    ];

    /// Maps an opcode field value to its operation, or `None` when the value
    /// names no defined operation.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            OP_ADD => Some(Self::Add),
            OP_ADDI => Some(Self::Addi),
            OP_NAND => Some(Self::Nand),
            OP_LUI => Some(Self::Lui),
            OP_SW => Some(Self::Sw),
            OP_LW => Some(Self::Lw),
            OP_BEQ => Some(Self::Beq),
            OP_JALR => Some(Self::Jalr),
            _ => None,
        }
    }

    /// Returns the encoded 3-bit value.
    pub const fn bits(self) -> u16 {
        match self {
            Self::Add => OP_ADD,
            Self::Addi => OP_ADDI,
            Self::Nand => OP_NAND,
            Self::Lui => OP_LUI,
            Self::Sw => OP_SW,
            Self::Lw => OP_LW,
            Self::Beq => OP_BEQ,
            Self::Jalr => OP_JALR,
        }
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Addi => "addi",
            Self::Nand => "nand",
            Self::Lui => "lui",
            Self::Sw => "sw",
            Self::Lw => "lw",
            Self::Beq => "beq",
            Self::Jalr => "jalr",
        }
    }

    /// Returns the instruction layout used by this opcode.
    ///
    /// `jalr` uses the I layout with the immediate ignored.
    pub const fn format(self) -> Format {
        match self {
            Self::Add | Self::Nand => Format::R,
            Self::Lui => Format::U,
            Self::Addi | Self::Sw | Self::Lw | Self::Beq | Self::Jalr => Format::I,
        }
    }
}
