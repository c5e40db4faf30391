#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleClass {
    Car,
    Motorcycle,
}

impl VehicleClass {
    pub fn noun(&self) -> &'static str {
        match self {
            VehicleClass::Car => "car",
            VehicleClass::Motorcycle => "motorcycle",
        }
    }
}

#[derive(Debug, Clone)]
struct BrandEntry {
    brand: String,
    models: Vec<String>,
}

fn entry(brand: &str, models: &[&str]) -> BrandEntry {
    BrandEntry {
        brand: brand.to_string(),
        models: models.iter().map(|m| m.to_string()).collect(),
    }
}

/// The rental fleet on offer, brand → models, in menu order. Selection
/// here is what turns into the free-form "Brand Model" descriptor; the
/// registry itself never checks descriptors against the catalog.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    cars: Vec<BrandEntry>,
    motorcycles: Vec<BrandEntry>,
}

impl VehicleCatalog {
    pub fn standard() -> Self {
        Self {
            cars: vec![
                entry("Toyota", &["Corolla", "Camry", "RAV4"]),
                entry("Honda", &["Civic", "Accord", "CR-V"]),
                entry("Ford", &["Focus", "Mustang", "Explorer"]),
            ],
            motorcycles: vec![
                entry("Yamaha", &["MT-07", "YZF-R6", "FZ-10"]),
                entry("Honda", &["CBR500R", "Africa Twin", "CB500X"]),
                entry("Kawasaki", &["Ninja 400", "Z650", "Versys 650"]),
            ],
        }
    }

    fn entries(&self, class: VehicleClass) -> &[BrandEntry] {
        match class {
            VehicleClass::Car => &self.cars,
            VehicleClass::Motorcycle => &self.motorcycles,
        }
    }

    pub fn brands(&self, class: VehicleClass) -> Vec<&str> {
        self.entries(class)
            .iter()
            .map(|e| e.brand.as_str())
            .collect()
    }

    pub fn models(&self, class: VehicleClass, brand: &str) -> Option<&[String]> {
        self.entries(class)
            .iter()
            .find(|e| e.brand == brand)
            .map(|e| e.models.as_slice())
    }

    /// "Brand Model" for a catalog member, None otherwise.
    pub fn descriptor(&self, class: VehicleClass, brand: &str, model: &str) -> Option<String> {
        self.models(class, brand)?
            .iter()
            .find(|m| *m == model)
            .map(|m| format!("{} {}", brand, m))
    }
}
