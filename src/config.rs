/// Field edge length. Both axes run over `[0, FIELD_SIZE)`.
pub const FIELD_SIZE: usize = 10;
