use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_BUFFER_SIZE, FIELD_SEPARATOR, GENERATED_TEMP_MAX, GENERATED_TEMP_MIN,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// City names drawn by the generator. Duplicates are intentional; they only
/// skew the distribution.
pub const CITIES: [&str; 221] = [
    "Gali-Makhian-Wali", "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Ahmedabad", "Chennai",
    "Kolkata", "Pune", "Jaipur", "Lucknow", "Kanpur", "Nagpur", "Indore", "Thane", "Bhopal",
    "Visakhapatnam", "Patna", "Vadodara", "Ghaziabad", "Ludhiana", "Agra", "Nashik", "Ranchi",
    "Faridabad", "Meerut", "Rajkot", "Kalyan-Dombivli", "Vasai-Virar", "Varanasi", "Srinagar",
    "Aurangabad", "Dhanbad", "Amritsar", "Kotha", "Navi-Mumbai", "Allahabad", "Howrah",
    "Gwalior", "Jabalpur", "Coimbatore", "Vijayawada", "Jodhpur", "Madurai", "Raipur", "Kota",
    "Chandigarh", "Guwahati", "Solapur", "Hubballi-Dharwad", "Mysore", "Tiruchirappalli",
    "Bareilly", "Aligarh", "Tiruppur", "Moradabad", "Bhubaneswar", "Salem", "Warangal",
    "Guntur", "Bhiwandi", "Saharanpur", "Gorakhpur", "Bikaner", "Amravati", "Lula-Ahir",
    "Jamshedpur", "Bhilai", "Cuttack", "Firozabad", "Kochi", "Nellore", "Bhavnagar", "Dehradun",
    "Durgapur", "Asansol", "Rourkela", "Tatti-Khana", "Nanded", "Kolhapur", "Ajmer", "Akola",
    "Gulbarga", "Ujjain", "Bhosari", "Jamnagar", "Loni", "Siliguri", "Jhansi", "Ulhasnagar",
    "Jammu", "Sangli-Miraj-&-Kupwad", "Belagavi", "Mangalore", "Erode", "Tirunelveli",
    "Malegaon", "Gaya", "Udaipur", "Maheshtala", "Davanagere", "Kozhikode", "Kurnool", "Bokaro",
    "Rajahmundry", "South Dumdum", "Gopalpur", "Hajipur", "Bilaspur", "Muzaffarnagar",
    "Mathura", "Patiala", "Sagar", "Vellore", "Bijapur", "Shimoga", "Burhanpur", "Panipat",
    "Darbhanga", "Dibrugarh", "Tumkur", "Bally", "Muzaffarpur", "Ambattur", "North-Dumdum",
    "Cumbum", "Rohtak", "Bhagalpur", "Kollam", "Dewas", "Nizamabad", "Shahjahanpur",
    "Bharatpur", "Bhusawal", "Ratlam", "Chhindwara", "Dindigul", "Rewa", "Hajipur", "Ambala",
    "Korba", "Purnia", "Satna", "Kakinada", "Bhimavaram", "Ongole", "Kundara", "Hosur", "Adoni",
    "Machilipatnam", "Proddatur", "Tiruvannamalai", "Sikar", "Gondia", "Bhiwani", "Sirsa",
    "Karaikal", "Chittoor", "Dibrugarh", "Tezpur", "Shillong", "Imphal", "Aizawl", "Itanagar",
    "Kohima", "Agartala", "Gangtok", "Kavaratti", "Port-Blair", "Daman", "Silvassa", "Panaji",
    "Margao", "Mapusa", "Porvorim", "Karwar", "Hospet", "Lulla-Nagar", "Chikkamagaluru",
    "Raichur", "Bidar", "Yavatmal", "Chandrapur", "Wardha", "Nanded", "Gondia", "Hingoli",
    "Parbhani", "LaiLunga", "Jalgaon", "Amreli", "Bhuj", "Mehsana", "Anand", "Palanpur",
    "Surendranagar", "Gandhidham", "Himatnagar", "Junagadh", "Porbandar", "Navsari", "Vapi",
    "Valsad", "Morbi", "Dahod", "Godhra", "Chhapra", "Munger", "Arrah", "Kutta", "Begusarai",
    "Katihar", "Siwan", "Gopalganj", "Samastipur", "Darbhanga", "Sasaram", "Hazaribagh",
    "Giridih", "Daltonganj", "Chutia",
];

/// Seeded writer of synthetic `city;temperature` test cases.
///
/// Temperatures are uniform in [-99.0, 99.0) printed with one decimal, so the
/// parsed value may be `99.0` or `-0.0`.
pub struct TestcaseGenerator {
    rng: StdRng,
}

impl TestcaseGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn next_record(&mut self) -> (&'static str, f64) {
        let city = CITIES[self.rng.gen_range(0..CITIES.len())];
        let temperature = self.rng.gen_range(GENERATED_TEMP_MIN..GENERATED_TEMP_MAX);
        (city, temperature)
    }

    /// Write `rows` lines to `out` and flush it
    pub fn write_to<W: Write>(&mut self, mut out: W, rows: usize) -> Result<usize> {
        for _ in 0..rows {
            let (city, temperature) = self.next_record();
            writeln!(out, "{}{}{:.1}", city, FIELD_SEPARATOR, temperature)?;
        }
        out.flush()?;
        Ok(rows)
    }

    /// Create (or truncate) `path` and fill it with `rows` lines
    pub fn write(&mut self, path: &Path, rows: usize) -> Result<usize> {
        let file = File::create(path)?;
        let written = self.write_to(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file), rows)?;
        info!(path = %path.display(), rows = written, "test case generated");
        Ok(written)
    }

    pub fn render(&mut self, rows: usize) -> String {
        let mut input = String::with_capacity(rows * 16);
        for _ in 0..rows {
            let (city, temperature) = self.next_record();
            // Writing into a String cannot fail
            let _ = writeln!(input, "{}{}{:.1}", city, FIELD_SEPARATOR, temperature);
        }
        input
    }
}
