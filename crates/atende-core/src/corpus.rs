//! Knowledge-base documents
//!
//! The corpus is fixed at startup: four documents compiled into the binary.
//! There are no insert or delete operations; the set is rebuilt in full on
//! every process start.
//!
//! Author: hephaex@gmail.com

use serde::{Deserialize, Serialize};

/// A single knowledge-base document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier, unique within the corpus
    pub id: u32,

    /// Full document text
    pub text: String,
}

impl Document {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// The built-in company knowledge base
pub fn default_corpus() -> Vec<Document> {
    vec![
        Document::new(
            1,
            "O impacto das redes sociais na sociedade moderna: As redes sociais \
             transformaram a maneira como nos comunicamos, trabalhamos e interagimos \
             uns com os outros. Elas permitem que as pessoas se conectem \
             instantaneamente, mas também levantam questões sobre privacidade, saúde \
             mental e disseminação de informações falsas. Com a evolução dessas \
             plataformas, é fundamental que os usuários aprendam a navegar por elas \
             de forma responsável.",
        ),
        Document::new(
            2,
            "A importância da sustentabilidade: Em um mundo cada vez mais afetado \
             pelas mudanças climáticas, a sustentabilidade se torna um tema crucial. \
             Práticas sustentáveis não apenas ajudam a proteger o meio ambiente, mas \
             também promovem a justiça social e o desenvolvimento econômico. A \
             conscientização sobre o consumo responsável e a preservação dos recursos \
             naturais é essencial para garantir um futuro viável para as próximas \
             gerações.",
        ),
        Document::new(
            3,
            "A evolução da tecnologia e seu impacto no trabalho: A tecnologia tem \
             mudado radicalmente o mercado de trabalho. Com a automação e a \
             inteligência artificial, muitas profissões estão se transformando ou \
             desaparecendo. Por outro lado, novas oportunidades estão surgindo em \
             áreas como análise de dados, desenvolvimento de software e \
             cibersegurança. Adaptar-se a essas mudanças é vital para os \
             trabalhadores de hoje.",
        ),
        Document::new(
            4,
            "Saúde mental na era digital: A saúde mental é um tema que ganha cada \
             vez mais atenção na sociedade contemporânea. A pressão das redes \
             sociais, o isolamento e a sobrecarga de informações podem afetar o \
             bem-estar psicológico. É importante promover um diálogo aberto sobre \
             saúde mental, oferecendo suporte e recursos para aqueles que enfrentam \
             desafios. A terapia, a meditação e a desconexão das telas são algumas \
             estratégias que podem ajudar.",
        ),
    ]
}
