pub mod configuration;
pub mod configurationerror;

pub mod application {
    pub mod applicationerror;
    pub mod sampling;
    pub mod seriesanalysis;
    pub mod halfmaximum;
    pub mod circletangent;
    pub mod population;
    pub mod oscillatoryintegral;
    pub mod program;
}

pub mod math {
    pub mod numericserror;

    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod newtonpolynomial;
            pub mod linearspline;
        }
    }

    pub mod series {
        pub mod maclaurinseries;
        pub mod rangereduction;
    }

    pub mod rootfinding {
        pub mod root;
        pub mod fixedpoint;
        pub mod newtonraphson;
        pub mod bracketing;
    }

    pub mod quadrature {
        pub mod quadraturerule;
        pub mod newtoncotes;
        pub mod gausslegendre;
        pub mod runge;
    }
}

pub mod report {
    pub mod resultsink;
}
