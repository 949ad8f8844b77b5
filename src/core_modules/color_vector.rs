// THEORY:
// The `ColorVector` is the most fundamental unit of the extraction engine. It is a
// "dumb" data container for one sampled pixel, reduced to the three color channels
// that matter for clustering. Alpha never reaches this type: the sampler walks an
// RGBA buffer and the conversion below keeps only the first three bytes of each step.
//
// Vectors are created once by the sampler and only read afterwards; the clusterer
// treats each one as a point in a 3-dimensional RGB space.

pub mod color_vector {
    pub type Byte = u8;
    pub type Channel = Byte;
    pub type Component = f64;

    /// Bytes per pixel in the buffers handed to `From<&[Byte]>` (RGBA).
    pub const CHANNELS: usize = 4;

    /// A single sampled pixel as an (R, G, B) triple.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ColorVector {
        pub red: Channel,
        pub green: Channel,
        pub blue: Channel,
    }

    impl ColorVector {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Self { red, green, blue }
        }

        /// The vector as real-valued coordinates for distance math.
        pub fn components(&self) -> [Component; 3] {
            [
                self.red as Component,
                self.green as Component,
                self.blue as Component,
            ]
        }

        /// Squared Euclidean distance to a real-valued point.
        pub fn distance_squared(&self, point: &[Component; 3]) -> Component {
            let [r, g, b] = self.components();
            let dr = r - point[0];
            let dg = g - point[1];
            let db = b - point[2];
            dr * dr + dg * dg + db * db
        }
    }

    impl From<&[Byte]> for ColorVector {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into a color vector.", bytes.len());
            }
            // bytes[3] is alpha and is dropped.
            ColorVector::new(bytes[0], bytes[1], bytes[2])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::color_vector::*;

    #[test]
    fn drops_alpha_from_rgba_bytes() {
        let bytes: &[u8] = &[10, 20, 30, 0];
        assert_eq!(ColorVector::from(bytes), ColorVector::new(10, 20, 30));
    }

    #[test]
    #[should_panic]
    fn rejects_wrong_stride() {
        let bytes: &[u8] = &[10, 20, 30];
        let _ = ColorVector::from(bytes);
    }

    #[test]
    fn distance_squared_is_euclidean() {
        let v = ColorVector::new(255, 0, 0);
        assert_eq!(v.distance_squared(&[255.0, 0.0, 0.0]), 0.0);
        assert_eq!(v.distance_squared(&[252.0, 4.0, 0.0]), 25.0);
    }
}
