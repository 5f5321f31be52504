pub mod codec;

pub use codec::{decode_image, encode_png, read_image, write_png, DecodedImage};
